//! Overlap analysis: pair selection, per-project breakdown and the phase
//! machine that sequences them.

pub mod analysis;
pub mod breakdown;
pub mod cancel;
pub mod interval;
pub mod pair_selector;

pub use analysis::{
    AnalysisHandle, AnalysisOutcome, Phase, PhaseEvent, run_analysis, spawn_analysis, transition,
};
pub use breakdown::{breakdown_by_project, breakdown_by_project_with};
pub use cancel::CancelToken;
pub use pair_selector::{
    pair_durations, pair_durations_with, select_top_pair, select_top_pair_with,
};
