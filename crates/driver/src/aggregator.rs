//! Window Aggregator: the linear scan behind a timeline.
use std::collections::BTreeSet;

use chainio::ChainDataSource;
use primitives::{
    Address,
    activity::{ActivityAccumulator, AggregationResult},
    address::InvalidAddress,
    window::ActivityWindow,
};
use tracing::{debug, warn};

use crate::observer::{BlockOutcome, ScanObserver};

/// Scan `window` for transactions sent to `target` and derive the emergence
/// ratio against `known_actors`.
///
/// `target` is normalized before anything is fetched; a malformed address
/// fails the whole call. Blocks that cannot be fetched are logged, reported to
/// `observer` and skipped, so the result reflects the fetched blocks only.
pub async fn aggregate<S, O>(
    source: &S,
    target: &str,
    window: ActivityWindow,
    known_actors: &BTreeSet<Address>,
    observer: O,
) -> Result<AggregationResult, InvalidAddress>
where
    S: ChainDataSource + ?Sized,
    O: ScanObserver,
{
    let target = source.normalize(target)?;
    Ok(aggregate_address(source, target, window, known_actors, observer).await)
}

/// Same as [`aggregate`] for an address that is already normalized.
pub async fn aggregate_address<S, O>(
    source: &S,
    target: Address,
    window: ActivityWindow,
    known_actors: &BTreeSet<Address>,
    mut observer: O,
) -> AggregationResult
where
    S: ChainDataSource + ?Sized,
    O: ScanObserver,
{
    let mut accumulator = ActivityAccumulator::new();
    observer.on_start(&window);

    for height in window.heights() {
        match source.get_block(height, true).await {
            Ok(block) => {
                let matched = accumulator.observe_block(&block, target);
                observer.on_block(height, BlockOutcome::Scanned { matched });
            }
            Err(err) => {
                warn!(height, error = %err, "Damaged sector in the chronicle, skipping block");
                observer.on_block(height, BlockOutcome::Skipped(&err));
            }
        }
    }

    observer.on_finish();
    let result = accumulator.finalize(known_actors);
    debug!(
        %target,
        total_events = result.total_events(),
        actors = result.distinct_actors().len(),
        ratio = result.emergence_ratio(),
        "Window aggregated"
    );
    result
}
