//! Reading assignment records from text input.

pub mod date;
pub mod parser;

pub use date::TimeBasis;
pub use parser::{ParseOptions, load_records, parse_records, parse_str};
