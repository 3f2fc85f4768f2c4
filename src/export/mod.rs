// src/export/mod.rs

mod fs_utils;
mod model;
mod render;

pub use fs_utils::write_output;
pub use model::{PairReport, ResultRow};
pub use render::{render, render_pairs};

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

