//! Inclusive block-height ranges.
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors building an [`ActivityWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A window must span at least one block.
    #[error("window period must be at least one block")]
    EmptyPeriod,
    /// The start lies after the end.
    #[error("window start {start} is after end {end}")]
    Inverted {
        /// Requested first block
        start: u64,
        /// Requested last block
        end: u64,
    },
}

/// The inclusive range `[start_block, end_block]` of heights to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    /// First block of the window
    pub start_block: u64,
    /// Last block of the window
    pub end_block: u64,
}

impl ActivityWindow {
    /// Create a window over `[start_block, end_block]`.
    pub const fn new(start_block: u64, end_block: u64) -> Result<Self, WindowError> {
        if start_block > end_block {
            return Err(WindowError::Inverted { start: start_block, end: end_block });
        }
        Ok(Self { start_block, end_block })
    }

    /// The window of `period` blocks ending at (and including) `head`.
    ///
    /// If the chain is shorter than `period`, the window starts at genesis.
    pub const fn ending_at(head: u64, period: u64) -> Result<Self, WindowError> {
        if period == 0 {
            return Err(WindowError::EmptyPeriod);
        }
        Ok(Self { start_block: head.saturating_sub(period - 1), end_block: head })
    }

    /// Number of blocks in the window.
    pub const fn len(&self) -> u64 {
        self.end_block - self.start_block + 1
    }

    /// Always `false`: a window holds at least one block.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Heights in ascending order.
    pub fn heights(&self) -> RangeInclusive<u64> {
        self.start_block..=self.end_block
    }
}
