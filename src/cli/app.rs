//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use super::output::{Output, OutputFormat};
use super::{meeting, report};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Company rosters and employee reports")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides `default_format` from the config file)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the employee report (developers, staff, then general employees)
    Report,

    /// Run a roll-call meeting for one roster, or all of them
    Meeting {
        /// Which meeting to run
        #[arg(value_enum, default_value = "all")]
        kind: MeetingKind,
    },

    /// List every roster with its members
    Roster,
}

/// Meeting selector for the `meeting` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeetingKind {
    /// Staff-only meeting
    Staff,
    /// Developer scrum
    Scrum,
    /// On-boarding for general employees
    Onboarding,
    /// All three, in that order
    All,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Roster CLI starting");
    if let Some(path) = &cli.config {
        output.verbose_ctx("config", &format!("Loaded config from: {}", path.display()));
    }

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => report::report(&output, &config)?,
        Commands::Meeting { kind } => {
            output.verbose_ctx("meeting", &format!("Running meeting: {:?}", kind));
            meeting::run(&output, kind)?
        }
        Commands::Roster => report::roster(&output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
