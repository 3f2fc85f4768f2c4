//! Formatting utilities used for CLI and export outputs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Unit used to display overlap durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Days,
    Hours,
    Millis,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Hours => "hours",
            DurationUnit::Millis => "millis",
        }
    }

    /// Column title, e.g. "Days Worked".
    pub fn title(&self) -> &'static str {
        match self {
            DurationUnit::Days => "Days Worked",
            DurationUnit::Hours => "Hours Worked",
            DurationUnit::Millis => "Milliseconds Worked",
        }
    }

    pub fn convert(&self, millis: i64) -> f64 {
        match self {
            DurationUnit::Days => millis as f64 / MILLIS_PER_DAY,
            DurationUnit::Hours => millis as f64 / MILLIS_PER_HOUR,
            DurationUnit::Millis => millis as f64,
        }
    }
}

/// Render `millis` in `unit`. Milliseconds are always printed as integers.
pub fn format_duration(millis: i64, unit: DurationUnit, decimals: usize) -> String {
    match unit {
        DurationUnit::Millis => millis.to_string(),
        _ => format!("{:.*}", decimals, unit.convert(millis)),
    }
}
