use crate::cli::commands::{effective_config, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pair_durations;
use crate::errors::AppResult;
use crate::export;

/// Handle the `pairs` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pairs {
        file,
        top,
        time_basis,
        unit,
    } = cmd
    {
        let cfg = effective_config(cfg, *time_basis, *unit);
        let records = load_input(file, &cfg)?;
        let durations = pair_durations(&records)?;
        print!("{}", export::render_pairs(&durations, *top, &cfg));
    }
    Ok(())
}
