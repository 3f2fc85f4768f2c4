//! Phase machine that sequences pair selection and project breakdown, plus a
//! background runner that reports phase changes to the foreground.

use crate::core::breakdown::breakdown_by_project_with;
use crate::core::cancel::CancelToken;
use crate::core::pair_selector::select_top_pair_with;
use crate::errors::{AppError, AppResult};
use crate::models::{AssignmentRecord, EmployeePair, ProjectDurations};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    CalculatingPair,
    FetchingBreakdown {
        pair: EmployeePair,
    },
    Done {
        pair: EmployeePair,
        projects: ProjectDurations,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseEvent {
    StartCalculating,
    PairSelected(EmployeePair),
    BreakdownReady(ProjectDurations),
}

/// Next phase for `event`. A new calculation may start from any phase; the
/// other events only apply to the phase that expects them and are ignored
/// otherwise.
pub fn transition(phase: Phase, event: PhaseEvent) -> Phase {
    match (phase, event) {
        (_, PhaseEvent::StartCalculating) => Phase::CalculatingPair,
        (Phase::CalculatingPair, PhaseEvent::PairSelected(pair)) => {
            Phase::FetchingBreakdown { pair }
        }
        (Phase::FetchingBreakdown { pair }, PhaseEvent::BreakdownReady(projects)) => {
            Phase::Done { pair, projects }
        }
        (phase, _) => phase,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub pair: EmployeePair,
    pub projects: ProjectDurations,
}

/// Run both steps in order, calling `observer` after every phase change.
pub fn run_analysis<F>(
    records: &[AssignmentRecord],
    cancel: &CancelToken,
    mut observer: F,
) -> AppResult<AnalysisOutcome>
where
    F: FnMut(&Phase),
{
    let mut phase = transition(Phase::Idle, PhaseEvent::StartCalculating);
    observer(&phase);

    let pair = select_top_pair_with(records, cancel)?;
    phase = transition(phase, PhaseEvent::PairSelected(pair.clone()));
    observer(&phase);

    let projects = breakdown_by_project_with(records, &pair.first, &pair.second, cancel)?;
    phase = transition(phase, PhaseEvent::BreakdownReady(projects));
    observer(&phase);

    match phase {
        Phase::Done { pair, projects } => Ok(AnalysisOutcome { pair, projects }),
        other => Err(AppError::Worker(format!(
            "analysis stopped in unexpected phase {other:?}"
        ))),
    }
}

enum WorkerMessage {
    Phase(Phase),
    Finished(AppResult<AnalysisOutcome>),
}

/// A running background analysis.
pub struct AnalysisHandle {
    receiver: Receiver<WorkerMessage>,
    worker: JoinHandle<()>,
    cancel: CancelToken,
}

/// Move `records` to a worker thread and run the analysis there.
pub fn spawn_analysis(records: Vec<AssignmentRecord>, cancel: CancelToken) -> AnalysisHandle {
    let (sender, receiver) = mpsc::channel();
    let worker_cancel = cancel.clone();

    let worker = thread::spawn(move || {
        debug!(records = records.len(), "analysis worker started");
        let result = run_analysis(&records, &worker_cancel, |phase| {
            // A dropped receiver only means nobody is listening.
            let _ = sender.send(WorkerMessage::Phase(phase.clone()));
        });
        let _ = sender.send(WorkerMessage::Finished(result));
    });

    AnalysisHandle {
        receiver,
        worker,
        cancel,
    }
}

impl AnalysisHandle {
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Block until the worker finishes, forwarding each phase to `on_phase`.
    pub fn wait<F>(self, mut on_phase: F) -> AppResult<AnalysisOutcome>
    where
        F: FnMut(&Phase),
    {
        let mut outcome = None;
        for message in self.receiver.iter() {
            match message {
                WorkerMessage::Phase(phase) => on_phase(&phase),
                WorkerMessage::Finished(result) => outcome = Some(result),
            }
        }

        self.worker
            .join()
            .map_err(|_| AppError::Worker("analysis thread panicked".to_string()))?;

        outcome.unwrap_or_else(|| {
            Err(AppError::Worker(
                "analysis thread exited without a result".to_string(),
            ))
        })
    }
}
