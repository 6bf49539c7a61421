//! Chronograph Driver crate root
#![allow(clippy::uninlined_format_args)]

pub mod aggregator;
pub mod driver;
pub mod known_actors;
pub mod observer;

pub use aggregator::{aggregate, aggregate_address};
pub use driver::{Driver, Timeline};
pub use observer::{BlockOutcome, ScanObserver};
