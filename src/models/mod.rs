pub mod durations;
pub mod pair;
pub mod record;

pub use durations::{PairDurations, ProjectDurations};
pub use pair::EmployeePair;
pub use record::AssignmentRecord;
