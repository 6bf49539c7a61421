//! Core primitives for chronograph.
/// Windowed activity accumulation and the emergence ratio
pub mod activity;
/// Address parsing and canonical form
pub mod address;
/// Block and transaction types
pub mod block;
/// Emergence ratio classification
pub mod verdict;
/// Inclusive block ranges
pub mod window;

pub use alloy_primitives::Address;
