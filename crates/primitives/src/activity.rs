use std::collections::BTreeSet;

use alloy_primitives::Address;
use serde::Serialize;

use crate::{block::Block, verdict::Verdict};

/// Running totals for one scan. Built fresh per run, fed one block at a time
/// and consumed by [`ActivityAccumulator::finalize`].
#[derive(Debug, Clone, Default)]
pub struct ActivityAccumulator {
    total_events: u64,
    actors: BTreeSet<Address>,
}

impl ActivityAccumulator {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self { total_events: 0, actors: BTreeSet::new() }
    }

    /// Count the transactions in `block` sent to `target` and record their
    /// senders. Returns the number of matching transactions in this block.
    pub fn observe_block(&mut self, block: &Block, target: Address) -> u64 {
        let mut matched = 0;
        for tx in block.transactions.iter().filter(|tx| tx.targets(target)) {
            matched += 1;
            self.actors.insert(tx.from);
        }
        self.total_events += matched;
        matched
    }

    /// Matching transactions seen so far.
    pub const fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Close the scan and compute the emergence ratio against `known_actors`.
    pub fn finalize(self, known_actors: &BTreeSet<Address>) -> AggregationResult {
        let new_actors: BTreeSet<Address> =
            self.actors.difference(known_actors).copied().collect();
        let emergence_ratio = emergence_ratio(new_actors.len(), self.actors.len());

        AggregationResult {
            total_events: self.total_events,
            distinct_actors: self.actors,
            new_actors,
            emergence_ratio,
        }
    }
}

/// Percentage of `new` among `distinct` actors; 0 when no actor was seen.
pub fn emergence_ratio(new: usize, distinct: usize) -> f64 {
    if distinct == 0 {
        return 0.0;
    }
    new as f64 / distinct as f64 * 100.0
}

/// Activity observed for one contract over one window.
///
/// `distinct_actors.len() <= total_events` and `emergence_ratio` lies in
/// `[0, 100]`, being 0 exactly when no actor was observed. With an empty
/// known-actor set every observed actor is new, so the ratio is 100 as soon
/// as a single actor shows up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    total_events: u64,
    distinct_actors: BTreeSet<Address>,
    new_actors: BTreeSet<Address>,
    emergence_ratio: f64,
}

impl AggregationResult {
    /// Number of transactions sent to the contract.
    pub const fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Every sender seen interacting with the contract.
    pub const fn distinct_actors(&self) -> &BTreeSet<Address> {
        &self.distinct_actors
    }

    /// Senders absent from the known-actor set.
    pub const fn new_actors(&self) -> &BTreeSet<Address> {
        &self.new_actors
    }

    /// Share of new actors, in percent.
    pub const fn emergence_ratio(&self) -> f64 {
        self.emergence_ratio
    }

    /// Classification of the emergence ratio.
    pub fn verdict(&self) -> Verdict {
        Verdict::classify(self.emergence_ratio)
    }
}
