//! Chronograph Driver - resolves the window and runs the aggregation
use std::collections::BTreeSet;

use chainio::ChainDataSource;
use eyre::{Context, Result};
use primitives::{Address, activity::AggregationResult, window::ActivityWindow};
use tracing::info;

use crate::{
    aggregator::aggregate_address,
    observer::{ScanObserver, SkipRecorder, Tee},
};

/// A finished scan of one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// The artifact under analysis
    pub target: Address,
    /// Heights that were scanned
    pub window: ActivityWindow,
    /// Aggregated activity
    pub result: AggregationResult,
    /// Heights that could not be fetched, ascending
    pub skipped_blocks: Vec<u64>,
    /// Size of the known-actor set the ratio was computed against
    pub known_actors: usize,
}

/// Drives a single timeline reconstruction against a chain data source.
#[derive(Debug)]
pub struct Driver<S> {
    source: S,
    known_actors: BTreeSet<Address>,
}

impl<S: ChainDataSource> Driver<S> {
    /// Create a driver with an empty known-actor set.
    pub const fn new(source: S) -> Self {
        Self { source, known_actors: BTreeSet::new() }
    }

    /// Compare observed actors against `known_actors` instead of the empty set.
    pub fn with_known_actors(mut self, known_actors: BTreeSet<Address>) -> Self {
        self.known_actors = known_actors;
        self
    }

    /// Actors treated as already known.
    pub const fn known_actors(&self) -> &BTreeSet<Address> {
        &self.known_actors
    }

    /// The window of `period` blocks ending at the current head.
    pub async fn resolve_window(&self, period: u64) -> Result<ActivityWindow> {
        let head = self
            .source
            .current_height()
            .await
            .wrap_err("Failed to read the chain head; is the chain data source reachable?")?;
        Ok(ActivityWindow::ending_at(head, period)?)
    }

    /// Reconstruct the timeline of `artifact` over the last `period` blocks.
    ///
    /// Fails on a malformed artifact address (before touching the source), an
    /// unreadable chain head or an empty period. Unreadable blocks are skipped.
    pub async fn run<O: ScanObserver>(
        &self,
        artifact: &str,
        period: u64,
        observer: O,
    ) -> Result<Timeline> {
        let target = self.source.normalize(artifact).wrap_err("Invalid artifact address")?;
        let window = self.resolve_window(period).await?;

        info!(
            %target,
            period,
            start = window.start_block,
            end = window.end_block,
            known_actors = self.known_actors.len(),
            "📜 Reconstructing timeline"
        );

        let mut skips = SkipRecorder::default();
        let result = aggregate_address(
            &self.source,
            target,
            window,
            &self.known_actors,
            Tee(&mut skips, observer),
        )
        .await;

        if !skips.skipped().is_empty() {
            info!(skipped = skips.skipped().len(), "Some blocks could not be read and were skipped");
        }

        Ok(Timeline {
            target,
            window,
            result,
            skipped_blocks: skips.into_skipped(),
            known_actors: self.known_actors.len(),
        })
    }
}
