use crate::export::OutputFormat;
use crate::input::TimeBasis;
use crate::utils::formatting::DurationUnit;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rPairTime
#[derive(Parser)]
#[command(
    name = "rpairtime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find the pair of employees who worked together the longest, and on which projects",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Find the top pair and break down their shared time per project
    Analyze {
        /// Input file: one `EmpID, ProjectID, DateFrom, DateTo` record per line
        file: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE", help = "Write results to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', requires = "out", help = "Overwrite the output file")]
        force: bool,

        #[arg(long, short = 'q', help = "Do not print progress messages")]
        quiet: bool,

        #[arg(long = "time-basis", value_enum, help = "Interpret input dates as local time or UTC")]
        time_basis: Option<TimeBasis>,

        #[arg(long, value_enum, help = "Unit used to display durations")]
        unit: Option<DurationUnit>,
    },

    /// Rank every employee pair by raw aggregated overlap
    Pairs {
        /// Input file: one `EmpID, ProjectID, DateFrom, DateTo` record per line
        file: String,

        #[arg(long, default_value_t = 10, help = "Number of pairs to show")]
        top: usize,

        #[arg(long = "time-basis", value_enum, help = "Interpret input dates as local time or UTC")]
        time_basis: Option<TimeBasis>,

        #[arg(long, value_enum, help = "Unit used to display durations")]
        unit: Option<DurationUnit>,
    },
}
