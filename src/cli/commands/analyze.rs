use crate::cli::commands::{effective_config, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CancelToken, Phase, spawn_analysis};
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `analyze` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        format,
        out,
        force,
        quiet,
        time_basis,
        unit,
    } = cmd
    {
        let cfg = effective_config(cfg, *time_basis, *unit);
        let records = load_input(file, &cfg)?;
        if !*quiet {
            info(format!("Loaded {} records from {}", records.len(), file));
        }

        let handle = spawn_analysis(records, CancelToken::new());
        let outcome = handle.wait(|phase| {
            if !*quiet {
                report_phase(phase);
            }
        })?;

        if outcome.projects.is_empty() {
            warning(format!(
                "{} never worked on the same project at the same time",
                outcome.pair
            ));
        }

        let rendered = export::render(&outcome, *format, &cfg)?;
        export::write_output(&rendered, out.as_deref().map(Path::new), *force)?;
    }
    Ok(())
}

fn report_phase(phase: &Phase) {
    match phase {
        Phase::Idle => {}
        Phase::CalculatingPair => info(
            "Calculating which pair of employees worked together for the longest period of time.",
        ),
        Phase::FetchingBreakdown { pair } => info(format!(
            "Retrieving the projects {pair} worked on together."
        )),
        Phase::Done { projects, .. } => {
            success(format!("Analysis complete: {} shared project(s).", projects.len()))
        }
    }
}
