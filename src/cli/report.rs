//! Report and roster listing commands

use std::io;

use anyhow::{Context, Result};

use super::output::Output;
use crate::config::Config;
use crate::demo::{build_report, sample_company};
use crate::domain::{AsEmployee, IdAllocator};
use crate::report::display_report;

/// Print the accumulated employee report
pub fn report(output: &Output, config: &Config) -> Result<()> {
    let mut ids = IdAllocator::new();
    let company = sample_company(&mut ids);
    output.verbose_ctx(
        "report",
        &format!("Built sample company with {} employees", ids.issued()),
    );

    let report = build_report(&company, &config.layout);
    output.verbose_ctx("report", &format!("Report has {} lines", report.len()));

    if output.is_json() {
        output.data(&report);
    } else {
        display_report(&report, &mut io::stdout().lock()).context("Failed to write report")?;
    }

    Ok(())
}

/// List every roster
pub fn roster(output: &Output) -> Result<()> {
    let mut ids = IdAllocator::new();
    let company = sample_company(&mut ids);
    output.verbose_ctx("roster", &format!("Headcount: {}", company.headcount()));

    if output.is_json() {
        output.data(&company);
        return Ok(());
    }

    println!("Staff ({}):", company.staff().len());
    println!("{:<5} {:<12} {:<10} UNIQUE PASS", "ID", "NAME", "ROLE");
    println!("{}", "-".repeat(40));
    for member in company.staff() {
        let pass = if member.has_unique_pass() { "yes" } else { "no" };
        println!(
            "{:<5} {:<12} {:<10} {}",
            member.id(),
            member.name(),
            member.role().label(),
            pass
        );
    }

    output.blank();
    print_plain_roster("Developers", company.devs());
    output.blank();
    print_plain_roster("General employees", company.general());

    Ok(())
}

fn print_plain_roster<T: AsEmployee>(title: &str, members: &[T]) {
    println!("{} ({}):", title, members.len());
    println!("{:<5} NAME", "ID");
    println!("{}", "-".repeat(40));
    for member in members {
        println!("{:<5} {}", member.id(), member.name());
    }
}
