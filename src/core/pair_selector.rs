//! Finds the pair of employees with the highest total overlap across all
//! shared projects.

use crate::core::cancel::CancelToken;
use crate::errors::{AppError, AppResult};
use crate::models::{AssignmentRecord, EmployeePair, PairDurations};
use std::collections::HashSet;
use tracing::debug;

/// Distinct employee ids in first-seen order.
fn distinct_employees(records: &[AssignmentRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.employee_id.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}

pub fn pair_durations(records: &[AssignmentRecord]) -> AppResult<PairDurations> {
    pair_durations_with(records, &CancelToken::default())
}

/// Build the overlap aggregate for every unordered pair of distinct employees.
///
/// Every pair is present, including those that never overlap (total 0).
/// Records are compared as ordered combinations, so each overlapping record
/// pair contributes twice; the doubling applies to all pairs alike.
pub fn pair_durations_with(
    records: &[AssignmentRecord],
    cancel: &CancelToken,
) -> AppResult<PairDurations> {
    if records.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let employees = distinct_employees(records);
    if employees.len() < 2 {
        return Err(AppError::InsufficientEmployees(employees.len()));
    }

    let mut durations = PairDurations::default();
    for e1 in &employees {
        for e2 in &employees {
            if e1 == e2 {
                continue;
            }
            durations.ensure(EmployeePair::new(e1, e2));
        }
    }

    for r1 in records {
        cancel.check()?;

        for r2 in records {
            if r1.employee_id == r2.employee_id {
                continue;
            }
            if r1.project_id != r2.project_id {
                continue;
            }
            let Some(overlap) = r1.interval().overlap(&r2.interval()) else {
                continue;
            };

            durations.add(&EmployeePair::new(&r1.employee_id, &r2.employee_id), overlap);
        }
    }

    debug!(
        records = records.len(),
        employees = employees.len(),
        pairs = durations.len(),
        "pair durations aggregated"
    );

    Ok(durations)
}

pub fn select_top_pair(records: &[AssignmentRecord]) -> AppResult<EmployeePair> {
    select_top_pair_with(records, &CancelToken::default())
}

/// Pair with the maximum aggregate. Ties go to the pair whose key was
/// initialized last (ascending stable sort, take last).
pub fn select_top_pair_with(
    records: &[AssignmentRecord],
    cancel: &CancelToken,
) -> AppResult<EmployeePair> {
    let durations = pair_durations_with(records, cancel)?;
    let (pair, total) = durations
        .top()
        .ok_or(AppError::InsufficientEmployees(0))?;

    debug!(%pair, total, "top pair selected");
    Ok(pair.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(e: &str, p: &str, from: i64, to: i64) -> AssignmentRecord {
        AssignmentRecord::new(e, p, from, to)
    }

    #[test]
    fn picks_the_only_overlapping_pair() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 50, 150),
            rec("A", "P2", 200, 300),
        ];

        assert_eq!(
            select_top_pair(&records).unwrap(),
            EmployeePair::new("A", "B")
        );
    }

    #[test]
    fn aggregate_counts_each_overlap_twice() {
        let records = vec![rec("A", "P1", 0, 100), rec("B", "P1", 50, 150)];
        let durations = pair_durations(&records).unwrap();
        assert_eq!(durations.get(&EmployeePair::new("A", "B")), Some(100));
    }

    #[test]
    fn pairs_without_overlap_are_present_with_zero() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 50, 150),
            rec("C", "P9", 0, 1_000),
        ];
        let durations = pair_durations(&records).unwrap();

        assert_eq!(durations.len(), 3);
        assert_eq!(durations.get(&EmployeePair::new("A", "C")), Some(0));
        assert_eq!(durations.get(&EmployeePair::new("B", "C")), Some(0));
    }

    #[test]
    fn different_projects_never_overlap() {
        let records = vec![rec("A", "P1", 0, 100), rec("B", "P2", 0, 100)];
        let durations = pair_durations(&records).unwrap();
        assert_eq!(durations.get(&EmployeePair::new("A", "B")), Some(0));
    }

    #[test]
    fn overlaps_sum_across_projects_and_records() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 50, 150),
            rec("A", "P2", 0, 10),
            rec("B", "P2", 0, 10),
            rec("C", "P1", 90, 300),
        ];
        let durations = pair_durations(&records).unwrap();

        // (50 + 10) * 2
        assert_eq!(durations.get(&EmployeePair::new("A", "B")), Some(120));
        // 10 * 2
        assert_eq!(durations.get(&EmployeePair::new("A", "C")), Some(20));
        // 60 * 2
        assert_eq!(durations.get(&EmployeePair::new("B", "C")), Some(120));
    }

    #[test]
    fn full_range_records_saturate_instead_of_overflowing() {
        let records = vec![
            rec("A", "P1", i64::MIN, i64::MAX),
            rec("B", "P1", i64::MIN, i64::MAX),
        ];
        let durations = pair_durations(&records).unwrap();
        assert_eq!(durations.get(&EmployeePair::new("A", "B")), Some(i64::MAX));
        assert_eq!(
            select_top_pair(&records).unwrap(),
            EmployeePair::new("A", "B")
        );
    }

    #[test]
    fn ties_go_to_the_last_initialized_pair() {
        // Keys are initialized A-B, A-C, B-C; all three tie at 0.
        let records = vec![
            rec("A", "P1", 0, 10),
            rec("B", "P2", 0, 10),
            rec("C", "P3", 0, 10),
        ];
        assert_eq!(
            select_top_pair(&records).unwrap(),
            EmployeePair::new("B", "C")
        );
    }

    #[test]
    fn lone_pair_without_overlap_is_still_selected() {
        let records = vec![rec("A", "P1", 0, 10), rec("B", "P1", 20, 30)];
        assert_eq!(
            select_top_pair(&records).unwrap(),
            EmployeePair::new("A", "B")
        );
    }

    #[test]
    fn empty_input_is_reported() {
        assert!(matches!(select_top_pair(&[]), Err(AppError::EmptyInput)));
    }

    #[test]
    fn single_employee_is_reported() {
        let records = vec![rec("A", "P1", 0, 10), rec("A", "P2", 0, 10)];
        assert!(matches!(
            select_top_pair(&records),
            Err(AppError::InsufficientEmployees(1))
        ));
    }

    #[test]
    fn cancelled_token_stops_the_scan() {
        let records = vec![rec("A", "P1", 0, 10), rec("B", "P1", 0, 10)];
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(matches!(
            select_top_pair_with(&records, &cancel),
            Err(AppError::Cancelled)
        ));
    }
}
