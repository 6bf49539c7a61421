use std::fmt;

use serde::Serialize;

/// Ratio above which a window is classified [`Verdict::High`].
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Ratio above which a window is classified at least [`Verdict::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Categorical reading of an emergence ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// More than 80% of the actors are new
    High,
    /// More than 50% and at most 80% of the actors are new
    Medium,
    /// At most 50% of the actors are new
    Low,
}

impl Verdict {
    /// Classify a ratio in `[0, 100]`. Total: anything that is not strictly
    /// above a threshold, including NaN, falls through to [`Verdict::Low`].
    pub fn classify(ratio: f64) -> Self {
        if ratio > HIGH_THRESHOLD {
            Self::High
        } else if ratio > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Name of the historical epoch this verdict stands for.
    pub const fn epoch(self) -> &'static str {
        match self {
            Self::High => "Renaissance",
            Self::Medium => "Age of Enlightenment",
            Self::Low => "Classical period",
        }
    }

    /// One-line interpretation of the verdict.
    pub const fn description(self) -> &'static str {
        match self {
            Self::High => "A period of explosive growth with many new actors entering the stage.",
            Self::Medium => "A steady inflow of new ideas and participants.",
            Self::Low => "History is being written by an established circle of actors.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(label)
    }
}
