//! Per-project overlap for a single employee pair.

use crate::core::cancel::CancelToken;
use crate::core::interval::Interval;
use crate::errors::{AppError, AppResult};
use crate::models::{AssignmentRecord, ProjectDurations};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Last interval seen for each employee of the pair on one project.
#[derive(Default)]
struct ProjectSlot<'a> {
    project_id: &'a str,
    first: Option<Interval>,
    second: Option<Interval>,
}

/// Canonical non-negative integer id below `u32::MAX` ("7", "12", not "07").
fn numeric_id(project_id: &str) -> Option<u32> {
    if project_id.len() > 1 && project_id.starts_with('0') {
        return None;
    }
    if !project_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    project_id.parse::<u32>().ok().filter(|n| *n < u32::MAX)
}

pub fn breakdown_by_project(
    records: &[AssignmentRecord],
    employee_a: &str,
    employee_b: &str,
) -> AppResult<ProjectDurations> {
    breakdown_by_project_with(records, employee_a, employee_b, &CancelToken::default())
}

/// Overlap between `employee_a` and `employee_b` on every project they share.
///
/// When an employee has several records on the same project only the last
/// one in input order is used. Projects where one of the two is missing, or
/// where their intervals are disjoint, are left out of the result.
///
/// Numeric project ids come first in ascending order, the rest follow in the
/// order they were first seen.
pub fn breakdown_by_project_with(
    records: &[AssignmentRecord],
    employee_a: &str,
    employee_b: &str,
    cancel: &CancelToken,
) -> AppResult<ProjectDurations> {
    if employee_a == employee_b {
        return Err(AppError::IdenticalEmployeeIds(employee_a.to_string()));
    }
    if records.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut slots: Vec<ProjectSlot> = Vec::new();
    let mut by_project: HashMap<&str, usize> = HashMap::new();

    for record in records {
        cancel.check()?;

        let is_first = record.employee_id == employee_a;
        if !is_first && record.employee_id != employee_b {
            continue;
        }

        let idx = *by_project
            .entry(record.project_id.as_str())
            .or_insert_with(|| {
                slots.push(ProjectSlot {
                    project_id: record.project_id.as_str(),
                    ..Default::default()
                });
                slots.len() - 1
            });

        let slot = &mut slots[idx];
        if is_first {
            slot.first = Some(record.interval());
        } else {
            slot.second = Some(record.interval());
        }
    }

    slots.sort_by_key(|slot| match numeric_id(slot.project_id) {
        Some(n) => (0, n),
        None => (1, 0),
    });

    let mut durations = ProjectDurations::default();
    for slot in &slots {
        let (Some(first), Some(second)) = (slot.first, slot.second) else {
            continue;
        };
        match first.overlap(&second) {
            Some(millis) => durations.push(slot.project_id, millis),
            None => trace!(project = slot.project_id, "intervals do not intersect"),
        }
    }

    debug!(
        employee_a,
        employee_b,
        projects = slots.len(),
        shared = durations.len(),
        "project breakdown computed"
    );

    Ok(durations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(e: &str, p: &str, from: i64, to: i64) -> AssignmentRecord {
        AssignmentRecord::new(e, p, from, to)
    }

    #[test]
    fn reports_only_shared_projects() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 50, 150),
            rec("A", "P2", 200, 300),
        ];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects.get("P1"), Some(50));
        assert_eq!(projects.get("P2"), None);
    }

    #[test]
    fn disjoint_intervals_are_omitted_not_zeroed() {
        let records = vec![rec("A", "P1", 0, 10), rec("B", "P1", 20, 30)];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn touching_intervals_are_emitted_with_zero() {
        let records = vec![rec("A", "P1", 0, 10), rec("B", "P1", 10, 30)];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();
        assert_eq!(projects.get("P1"), Some(0));
    }

    #[test]
    fn only_the_last_record_per_employee_and_project_counts() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 0, 100),
            rec("A", "P1", 500, 600),
        ];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn argument_order_does_not_change_the_result() {
        let records = vec![
            rec("A", "P1", 0, 100),
            rec("B", "P1", 40, 150),
            rec("C", "P1", 0, 1_000),
        ];
        assert_eq!(
            breakdown_by_project(&records, "A", "B").unwrap(),
            breakdown_by_project(&records, "B", "A").unwrap()
        );
    }

    #[test]
    fn projects_keep_first_seen_order() {
        let records = vec![
            rec("B", "P9", 0, 10),
            rec("A", "P1", 0, 10),
            rec("A", "P9", 0, 10),
            rec("B", "P1", 5, 10),
        ];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();
        let order: Vec<&str> = projects.iter().map(|(id, _)| id).collect();
        assert_eq!(order, ["P9", "P1"]);
    }

    #[test]
    fn numeric_projects_are_listed_in_ascending_order() {
        let records = vec![
            rec("A", "12", 0, 10),
            rec("A", "X", 0, 10),
            rec("A", "10", 0, 10),
            rec("A", "007", 0, 10),
            rec("B", "12", 0, 10),
            rec("B", "X", 0, 10),
            rec("B", "10", 0, 10),
            rec("B", "007", 0, 10),
        ];
        let projects = breakdown_by_project(&records, "A", "B").unwrap();
        let order: Vec<&str> = projects.iter().map(|(id, _)| id).collect();
        assert_eq!(order, ["10", "12", "X", "007"]);
    }

    #[test]
    fn numeric_id_accepts_only_canonical_integers() {
        assert_eq!(numeric_id("0"), Some(0));
        assert_eq!(numeric_id("42"), Some(42));
        assert_eq!(numeric_id("042"), None);
        assert_eq!(numeric_id("-1"), None);
        assert_eq!(numeric_id("+1"), None);
        assert_eq!(numeric_id("P1"), None);
        assert_eq!(numeric_id("4294967295"), None);
    }

    #[test]
    fn identical_ids_are_rejected() {
        let records = vec![rec("A", "P1", 0, 10)];
        assert!(matches!(
            breakdown_by_project(&records, "A", "A"),
            Err(AppError::IdenticalEmployeeIds(id)) if id == "A"
        ));
    }

    #[test]
    fn empty_input_is_reported() {
        assert!(matches!(
            breakdown_by_project(&[], "A", "B"),
            Err(AppError::EmptyInput)
        ));
    }
}
