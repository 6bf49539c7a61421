//! Rendering of finished timelines.
use std::fmt::{self, Write as _};

use console::style;
use driver::Timeline;
use primitives::{Address, address::to_canonical, verdict::Verdict, window::ActivityWindow};
use serde::Serialize;

const RULE_WIDTH: usize = 60;

/// Render `timeline` as styled, human-readable text.
pub fn render_text(timeline: &Timeline) -> String {
    let mut out = String::new();
    write_text(&mut out, timeline).expect("writing to a String cannot fail");
    out
}

fn write_text(out: &mut String, timeline: &Timeline) -> fmt::Result {
    let result = &timeline.result;
    let window = &timeline.window;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{}", style("📜 ChronoGraph timeline reconstruction").magenta().bold())?;
    writeln!(out, "ARTIFACT UNDER INVESTIGATION: {}", style(to_canonical(&timeline.target)).cyan())?;
    writeln!(
        out,
        "PERIOD ANALYZED: {} (epoch {} to {})",
        style(format!("{} blocks", window.len())).cyan(),
        window.start_block,
        window.end_block
    )?;

    writeln!(out)?;
    writeln!(out, "{}", style("📖 ChronoGraph historical report:").magenta().bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total events in the period: {}", style(result.total_events()).green().bold())?;
    writeln!(
        out,
        "Unique actors (participants): {}",
        style(result.distinct_actors().len()).green().bold()
    )?;
    if !timeline.skipped_blocks.is_empty() {
        writeln!(
            out,
            "Damaged sectors skipped: {}",
            style(timeline.skipped_blocks.len()).yellow().bold()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style("Key historical indicator:").magenta().underlined())?;
    writeln!(
        out,
        "✨ {} {}",
        style("Emergence coefficient:").yellow(),
        style(format_ratio(result.emergence_ratio())).bold()
    )?;
    writeln!(
        out,
        "   {}",
        style("(share of actors appearing on the stage for the first time)").yellow()
    )?;
    if timeline.known_actors == 0 && !result.distinct_actors().is_empty() {
        writeln!(
            out,
            "   {}",
            style("(no actor history supplied: every observed actor counts as new)").dim()
        )?;
    }
    writeln!(out, "{rule}")?;
    write!(out, "{}", verdict_line(result.verdict()))
}

/// `ratio` with two decimals and a percent sign.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}%")
}

/// The closing verdict sentence, colored by verdict.
pub fn verdict_line(verdict: Verdict) -> String {
    let text = format!("HISTORICAL VERDICT: '{}'. {}", verdict.epoch(), verdict.description());
    let styled = match verdict {
        Verdict::High => style(text).green(),
        Verdict::Medium => style(text).cyan(),
        Verdict::Low => style(text).blue(),
    };
    styled.to_string()
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    target: String,
    window: &'a ActivityWindow,
    total_events: u64,
    distinct_actors: Vec<String>,
    new_actors: Vec<String>,
    known_actors: usize,
    emergence_ratio: f64,
    verdict: Verdict,
    skipped_blocks: &'a [u64],
}

/// Render `timeline` as pretty-printed JSON with checksummed addresses.
pub fn render_json(timeline: &Timeline) -> eyre::Result<String> {
    let result = &timeline.result;
    let canonical = |actors: &std::collections::BTreeSet<Address>| {
        actors.iter().map(to_canonical).collect::<Vec<_>>()
    };

    let report = JsonReport {
        target: to_canonical(&timeline.target),
        window: &timeline.window,
        total_events: result.total_events(),
        distinct_actors: canonical(result.distinct_actors()),
        new_actors: canonical(result.new_actors()),
        known_actors: timeline.known_actors,
        emergence_ratio: result.emergence_ratio(),
        verdict: result.verdict(),
        skipped_blocks: &timeline.skipped_blocks,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use console::strip_ansi_codes;
    use primitives::{
        activity::ActivityAccumulator,
        block::{Block, Transaction},
    };

    const ARTIFACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    fn timeline(senders: &[u8], known: &[u8], skipped: Vec<u64>) -> Timeline {
        let target = primitives::address::normalize(ARTIFACT).unwrap();
        let txs = senders
            .iter()
            .map(|byte| Transaction::new(Address::repeat_byte(*byte), Some(target)))
            .collect();
        let known: BTreeSet<_> = known.iter().copied().map(Address::repeat_byte).collect();

        let mut acc = ActivityAccumulator::new();
        acc.observe_block(&Block::new(20, txs), target);

        Timeline {
            target,
            window: ActivityWindow::new(11, 20).unwrap(),
            result: acc.finalize(&known),
            skipped_blocks: skipped,
            known_actors: known.len(),
        }
    }

    #[test]
    fn text_report_lists_metrics_and_verdict() {
        let text = render_text(&timeline(&[1, 2, 2], &[], vec![13]));
        let plain = strip_ansi_codes(&text);

        assert!(plain.contains(ARTIFACT));
        assert!(plain.contains("10 blocks (epoch 11 to 20)"));
        assert!(plain.contains("Total events in the period: 3"));
        assert!(plain.contains("Unique actors (participants): 2"));
        assert!(plain.contains("Damaged sectors skipped: 1"));
        assert!(plain.contains("Emergence coefficient: 100.00%"));
        assert!(plain.contains("no actor history supplied"));
        assert!(plain.contains("HISTORICAL VERDICT: 'Renaissance'"));
    }

    #[test]
    fn text_report_for_quiet_window() {
        let plain = strip_ansi_codes(&render_text(&timeline(&[], &[], vec![]))).into_owned();

        assert!(plain.contains("Total events in the period: 0"));
        assert!(plain.contains("Emergence coefficient: 0.00%"));
        assert!(!plain.contains("Damaged sectors"));
        assert!(!plain.contains("no actor history supplied"));
        assert!(plain.contains("'Classical period'"));
    }

    #[test]
    fn ratio_has_two_decimals() {
        assert_eq!(format_ratio(100.0 / 3.0), "33.33%");
        assert_eq!(format_ratio(80.0), "80.00%");
        assert_eq!(format_ratio(0.0), "0.00%");
    }

    #[test]
    fn verdict_line_names_the_epoch() {
        let plain = strip_ansi_codes(&verdict_line(Verdict::Medium)).into_owned();
        assert!(plain.starts_with("HISTORICAL VERDICT: 'Age of Enlightenment'."));
    }

    #[test]
    fn json_report_uses_checksummed_addresses() {
        let json = render_json(&timeline(&[1, 2, 3], &[1], vec![12, 15])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["target"], ARTIFACT);
        assert_eq!(value["window"]["start_block"], 11);
        assert_eq!(value["window"]["end_block"], 20);
        assert_eq!(value["total_events"], 3);
        assert_eq!(value["distinct_actors"].as_array().unwrap().len(), 3);
        assert_eq!(value["new_actors"].as_array().unwrap().len(), 2);
        assert_eq!(value["known_actors"], 1);
        assert_eq!(value["verdict"], "medium");
        assert_eq!(value["skipped_blocks"], serde_json::json!([12, 15]));
        assert_eq!(value["new_actors"][0], to_canonical(&Address::repeat_byte(2)));
    }
}
