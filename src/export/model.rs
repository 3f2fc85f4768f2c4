// src/export/model.rs

use crate::core::AnalysisOutcome;
use crate::utils::formatting::DurationUnit;
use serde::Serialize;

/// One line of the result: a project the winning pair shared.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub employee_1: String,
    pub employee_2: String,
    pub project_id: String,
    pub duration_ms: i64,
    pub duration: f64,
}

/// Document written by the JSON output.
#[derive(Serialize, Debug)]
pub struct PairReport {
    pub employee_1: String,
    pub employee_2: String,
    pub unit: &'static str,
    pub total_ms: i64,
    pub projects: Vec<ResultRow>,
}

pub(crate) fn outcome_to_rows(outcome: &AnalysisOutcome, unit: DurationUnit) -> Vec<ResultRow> {
    outcome
        .projects
        .iter()
        .map(|(project_id, millis)| ResultRow {
            employee_1: outcome.pair.first.clone(),
            employee_2: outcome.pair.second.clone(),
            project_id: project_id.to_string(),
            duration_ms: millis,
            duration: unit.convert(millis),
        })
        .collect()
}

pub(crate) fn outcome_to_report(outcome: &AnalysisOutcome, unit: DurationUnit) -> PairReport {
    PairReport {
        employee_1: outcome.pair.first.clone(),
        employee_2: outcome.pair.second.clone(),
        unit: unit.as_str(),
        total_ms: outcome.projects.total(),
        projects: outcome_to_rows(outcome, unit),
    }
}
