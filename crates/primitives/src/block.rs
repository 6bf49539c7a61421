//! Chain data as seen by the aggregator.
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A transaction reduced to its sender and recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender
    pub from: Address,
    /// Recipient, `None` for contract creation
    pub to: Option<Address>,
}

impl Transaction {
    /// Create a new transaction.
    pub const fn new(from: Address, to: Option<Address>) -> Self {
        Self { from, to }
    }

    /// Create a contract-creation transaction, which has no recipient.
    pub const fn creation(from: Address) -> Self {
        Self { from, to: None }
    }

    /// Whether this transaction is sent to `target`.
    pub fn targets(&self, target: Address) -> bool {
        self.to == Some(target)
    }
}

/// A block and its transactions, in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block number
    pub number: u64,
    /// Transactions included in the block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block.
    pub const fn new(number: u64, transactions: Vec<Transaction>) -> Self {
        Self { number, transactions }
    }
}
