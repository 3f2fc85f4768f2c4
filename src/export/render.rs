// src/export/render.rs

use crate::config::Config;
use crate::core::AnalysisOutcome;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::export::model::{outcome_to_report, outcome_to_rows};
use crate::models::PairDurations;
use crate::utils::formatting::format_duration;
use crate::utils::table::Table;

const TABLE_SEPARATOR: char = '-';

/// Render the analysis result in `format`.
pub fn render(outcome: &AnalysisOutcome, format: OutputFormat, cfg: &Config) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(outcome, cfg)),
        OutputFormat::Csv => render_csv(outcome, cfg),
        OutputFormat::Json => render_json(outcome, cfg),
    }
}

fn render_table(outcome: &AnalysisOutcome, cfg: &Config) -> String {
    let mut table = Table::new([
        "Employee ID #1",
        "Employee ID #2",
        "Project ID",
        cfg.duration_unit.title(),
    ]);

    for (project_id, millis) in outcome.projects.iter() {
        table.add_row(vec![
            outcome.pair.first.clone(),
            outcome.pair.second.clone(),
            project_id.to_string(),
            format_duration(millis, cfg.duration_unit, cfg.decimals),
        ]);
    }

    table.render(TABLE_SEPARATOR)
}

fn render_csv(outcome: &AnalysisOutcome, cfg: &Config) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let rows = outcome_to_rows(outcome, cfg.duration_unit);

    if rows.is_empty() {
        wtr.write_record([
            "employee_1",
            "employee_2",
            "project_id",
            "duration_ms",
            "duration",
        ])?;
    }
    for row in &rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

fn render_json(outcome: &AnalysisOutcome, cfg: &Config) -> AppResult<String> {
    let report = outcome_to_report(outcome, cfg.duration_unit);
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Ranking of the raw pair aggregate, winner first, limited to `top` rows.
///
/// Values are the raw aggregate totals, in which every overlapping pair of
/// records is counted once in each direction.
pub fn render_pairs(durations: &PairDurations, top: usize, cfg: &Config) -> String {
    let overlap_title = format!("Raw Overlap ({})", cfg.duration_unit.as_str());
    let mut table = Table::new([
        "#",
        "Employee ID #1",
        "Employee ID #2",
        overlap_title.as_str(),
    ]);

    for (rank, (pair, total)) in durations.ranked().into_iter().take(top).enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            pair.first.clone(),
            pair.second.clone(),
            format_duration(total, cfg.duration_unit, cfg.decimals),
        ]);
    }

    table.render(TABLE_SEPARATOR)
}
