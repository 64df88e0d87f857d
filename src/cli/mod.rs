//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `report` (default) | Employee report: developers, staff, general employees |
//! | `meeting <kind>` | Roll call for `staff`, `scrum`, `onboarding` or `all` |
//! | `roster` | List every roster with its members |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! The default can be changed with `default_format` in the config file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! roster --verbose report
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod report;
mod meeting;

pub use app::{Cli, Commands, MeetingKind, run};
pub use output::{Output, OutputFormat};
