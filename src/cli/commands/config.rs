use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", config_path.display()));
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = Config::missing_fields(config_path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in &missing {
                    warning(format!("Missing field '{field}' (default value in use)"));
                }
            }
        }
    }

    Ok(())
}
