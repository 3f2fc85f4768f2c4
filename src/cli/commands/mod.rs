pub mod analyze;
pub mod config;
pub mod init;
pub mod pairs;

use crate::config::Config;
use crate::errors::AppResult;
use crate::input::{self, ParseOptions, TimeBasis};
use crate::models::AssignmentRecord;
use crate::utils::formatting::DurationUnit;
use std::path::Path;

/// Configuration with the per-command flags applied on top.
fn effective_config(cfg: &Config, time_basis: Option<TimeBasis>, unit: Option<DurationUnit>) -> Config {
    let mut cfg = cfg.clone();
    if let Some(basis) = time_basis {
        cfg.time_basis = basis;
    }
    if let Some(unit) = unit {
        cfg.duration_unit = unit;
    }
    cfg
}

/// Read the input file; open `NULL` end dates resolve to the end of today.
fn load_input(file: &str, cfg: &Config) -> AppResult<Vec<AssignmentRecord>> {
    let opts = ParseOptions::from_config(cfg, input::date::today())?;
    input::load_records(Path::new(file), &opts)
}
