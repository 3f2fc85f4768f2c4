//! Parser for the `EmpID, ProjectID, DateFrom, DateTo` text format.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::input::date::{self, TimeBasis};
use crate::models::AssignmentRecord;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Marker used in the `DateTo` column for assignments still in progress.
const OPEN_END: &str = "NULL";

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub date_formats: Vec<String>,
    pub time_basis: TimeBasis,
    pub has_headers: bool,
    pub delimiter: u8,
    /// Day that an open `NULL` end date resolves to (end of that day).
    pub reference_date: NaiveDate,
}

impl ParseOptions {
    pub fn from_config(cfg: &Config, reference_date: NaiveDate) -> AppResult<Self> {
        Ok(Self {
            date_formats: cfg.date_formats.clone(),
            time_basis: cfg.time_basis,
            has_headers: cfg.has_headers,
            delimiter: cfg.delimiter_byte()?,
            reference_date,
        })
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        let cfg = Config::default();
        Self {
            date_formats: cfg.date_formats,
            time_basis: cfg.time_basis,
            has_headers: cfg.has_headers,
            delimiter: b',',
            reference_date: date::today(),
        }
    }
}

pub fn load_records(path: &Path, opts: &ParseOptions) -> AppResult<Vec<AssignmentRecord>> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading assignment records");
    parse_records(file, opts)
}

pub fn parse_str(text: &str, opts: &ParseOptions) -> AppResult<Vec<AssignmentRecord>> {
    parse_records(text.as_bytes(), opts)
}

/// Parse every non-blank line into an [`AssignmentRecord`].
///
/// Each record is checked for non-empty ids and `from <= to`; the first
/// violation aborts parsing with [`AppError::InvalidRecord`].
pub fn parse_records<R: Read>(reader: R, opts: &ParseOptions) -> AppResult<Vec<AssignmentRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(opts.has_headers)
        .delimiter(opts.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let open_end = date::end_of_day(opts.reference_date, opts.time_basis)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());

        if row.iter().all(str::is_empty) {
            continue;
        }

        let record = parse_row(&row, line, opts, open_end)?;
        trace!(line, ?record, "parsed record");
        records.push(record);
    }

    debug!(records = records.len(), "input parsed");
    Ok(records)
}

fn parse_row(
    row: &StringRecord,
    line: u64,
    opts: &ParseOptions,
    open_end: i64,
) -> AppResult<AssignmentRecord> {
    let invalid = |reason: String| AppError::InvalidRecord { line, reason };

    if row.len() != 4 {
        return Err(invalid(format!("expected 4 fields, found {}", row.len())));
    }

    let employee_id = &row[0];
    let project_id = &row[1];
    if employee_id.is_empty() {
        return Err(invalid("empty employee id".to_string()));
    }
    if project_id.is_empty() {
        return Err(invalid("empty project id".to_string()));
    }

    let from = date::parse_timestamp(&row[2], &opts.date_formats, opts.time_basis)
        .map_err(|e| invalid(e.to_string()))?;
    let to = if row[3].eq_ignore_ascii_case(OPEN_END) {
        open_end
    } else {
        date::parse_timestamp(&row[3], &opts.date_formats, opts.time_basis)
            .map_err(|e| invalid(e.to_string()))?
    };

    if from > to {
        return Err(invalid(format!(
            "start date '{}' is after end date '{}'",
            &row[2], &row[3]
        )));
    }

    Ok(AssignmentRecord::new(employee_id, project_id, from, to))
}
