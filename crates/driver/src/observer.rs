//! Per-block notifications emitted while a window is scanned.
use chainio::FetchError;
use primitives::window::ActivityWindow;

/// What happened to one block of the window.
#[derive(Debug, Clone, Copy)]
pub enum BlockOutcome<'a> {
    /// The block was fetched; `matched` of its transactions targeted the artifact.
    Scanned {
        /// Matching transactions in this block
        matched: u64,
    },
    /// The block could not be fetched and contributes nothing.
    Skipped(&'a FetchError),
}

/// Receives scan progress. Observers never influence the aggregation result.
pub trait ScanObserver {
    /// Called once before the first block is requested.
    fn on_start(&mut self, _window: &ActivityWindow) {}

    /// Called after each height of the window, in ascending order.
    fn on_block(&mut self, height: u64, outcome: BlockOutcome<'_>);

    /// Called once after the last height.
    fn on_finish(&mut self) {}
}

impl ScanObserver for () {
    fn on_block(&mut self, _height: u64, _outcome: BlockOutcome<'_>) {}
}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_start(&mut self, window: &ActivityWindow) {
        (**self).on_start(window);
    }

    fn on_block(&mut self, height: u64, outcome: BlockOutcome<'_>) {
        (**self).on_block(height, outcome);
    }

    fn on_finish(&mut self) {
        (**self).on_finish();
    }
}

/// Records the heights that could not be fetched.
#[derive(Debug, Default, Clone)]
pub struct SkipRecorder {
    skipped: Vec<u64>,
}

impl SkipRecorder {
    /// Heights skipped so far, ascending.
    pub fn skipped(&self) -> &[u64] {
        &self.skipped
    }

    /// Consume the recorder, returning the skipped heights.
    pub fn into_skipped(self) -> Vec<u64> {
        self.skipped
    }
}

impl ScanObserver for SkipRecorder {
    fn on_block(&mut self, height: u64, outcome: BlockOutcome<'_>) {
        if let BlockOutcome::Skipped(_) = outcome {
            self.skipped.push(height);
        }
    }
}

/// Forwards every notification to two observers.
#[derive(Debug)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: ScanObserver, B: ScanObserver> ScanObserver for Tee<A, B> {
    fn on_start(&mut self, window: &ActivityWindow) {
        self.0.on_start(window);
        self.1.on_start(window);
    }

    fn on_block(&mut self, height: u64, outcome: BlockOutcome<'_>) {
        self.0.on_block(height, outcome);
        self.1.on_block(height, outcome);
    }

    fn on_finish(&mut self) {
        self.0.on_finish();
        self.1.on_finish();
    }
}
