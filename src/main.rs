//! Roster CLI - employee rosters and reports

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = company_roster::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
