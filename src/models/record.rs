use crate::core::interval::Interval;
use serde::Serialize;

/// One employee assigned to one project for an inclusive time interval.
///
/// `from` and `to` are milliseconds since the Unix epoch. `from <= to` is
/// guaranteed by the input parser; the core never re-validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub employee_id: String,
    pub project_id: String,
    pub from: i64,
    pub to: i64,
}

impl AssignmentRecord {
    pub fn new(
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        from: i64,
        to: i64,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            project_id: project_id.into(),
            from,
            to,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.from, self.to)
    }
}
