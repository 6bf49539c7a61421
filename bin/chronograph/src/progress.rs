use driver::{BlockOutcome, ScanObserver};
use indicatif::{ProgressBar, ProgressStyle};
use primitives::window::ActivityWindow;

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} blocks ({eta})";

/// Draws a progress bar on stderr while the window is scanned.
#[derive(Debug)]
pub(crate) struct ProgressObserver {
    enabled: bool,
    bar: Option<ProgressBar>,
    events: u64,
}

impl ProgressObserver {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None, events: 0 }
    }
}

impl ScanObserver for ProgressObserver {
    fn on_start(&mut self, window: &ActivityWindow) {
        if !self.enabled {
            return;
        }
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let bar = ProgressBar::new(window.len()).with_style(style);
        bar.set_message("Processing the chronicle");
        self.bar = Some(bar);
    }

    fn on_block(&mut self, _height: u64, outcome: BlockOutcome<'_>) {
        let Some(bar) = &self.bar else { return };
        if let BlockOutcome::Scanned { matched } = outcome {
            if matched > 0 {
                self.events += matched;
                bar.set_message(format!("Processing the chronicle ({} events)", self.events));
            }
        }
        bar.inc(1);
    }

    fn on_finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
