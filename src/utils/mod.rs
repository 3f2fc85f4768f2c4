pub mod formatting;
pub mod table;

pub use formatting::{DurationUnit, format_duration};
