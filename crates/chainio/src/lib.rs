//! `ChainIO` describes read access to historical chain data.
/// Fetch and connection errors
pub mod error;

pub use error::{ConnectionUnavailable, FetchError};

use alloy::providers::{RootProvider, fillers::FillProvider, utils::JoinedRecommendedFillers};
use async_trait::async_trait;
use primitives::{
    Address,
    address::{self, InvalidAddress},
    block::Block,
};

/// Alias to the default provider with all recommended fillers (read-only).
pub type DefaultProvider = FillProvider<JoinedRecommendedFillers, RootProvider>;

/// Read access to blocks by height plus the current chain head.
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    /// Height of the latest block.
    async fn current_height(&self) -> Result<u64, FetchError>;

    /// Fetch the block at `height`. With `include_transactions` unset the
    /// returned block carries no transactions.
    async fn get_block(
        &self,
        height: u64,
        include_transactions: bool,
    ) -> Result<Block, FetchError>;

    /// Parse a textual address into the form blocks are compared with.
    fn normalize(&self, raw: &str) -> Result<Address, InvalidAddress> {
        address::normalize(raw)
    }
}

#[async_trait]
impl<T: ChainDataSource + ?Sized> ChainDataSource for &T {
    async fn current_height(&self) -> Result<u64, FetchError> {
        (**self).current_height().await
    }

    async fn get_block(
        &self,
        height: u64,
        include_transactions: bool,
    ) -> Result<Block, FetchError> {
        (**self).get_block(height, include_transactions).await
    }

    fn normalize(&self, raw: &str) -> Result<Address, InvalidAddress> {
        (**self).normalize(raw)
    }
}

#[async_trait]
impl<T: ChainDataSource + ?Sized> ChainDataSource for Box<T> {
    async fn current_height(&self) -> Result<u64, FetchError> {
        (**self).current_height().await
    }

    async fn get_block(
        &self,
        height: u64,
        include_transactions: bool,
    ) -> Result<Block, FetchError> {
        (**self).get_block(height, include_transactions).await
    }

    fn normalize(&self, raw: &str) -> Result<Address, InvalidAddress> {
        (**self).normalize(raw)
    }
}
