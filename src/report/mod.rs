//! # Employee Report
//!
//! A report is an ordered list of text lines that accumulates across calls.
//! [`add_to_employee_report`] takes a roster of *any* employee category and
//! appends one line per member:
//!
//! ```text
//! Name: Jim        Id:   0
//! ```
//!
//! ## Roster parameter
//!
//! The roster parameter is `&[T]` with `T: AsEmployee`. The shared slice
//! means the function can only read the roster, never push into it, and the
//! bound means it can only see `name` and `id`. A `&[Developer]`,
//! `&[Staff]` and `&[Employee]` all go through the same signature.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::domain::AsEmployee;

/// Column widths for report lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportLayout {
    /// Minimum width of the name column (left-aligned)
    pub name_width: usize,

    /// Minimum width of the ID column (right-aligned)
    pub id_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            name_width: 10,
            id_width: 3,
        }
    }
}

impl ReportLayout {
    /// Formats one report line for `worker`
    ///
    /// Widths are minimums: longer names and IDs are never truncated.
    pub fn format_line<T: AsEmployee + ?Sized>(&self, worker: &T) -> String {
        format!(
            "Name: {:<name_w$} Id: {:>id_w$}",
            worker.name(),
            worker.id(),
            name_w = self.name_width,
            id_w = self.id_width,
        )
    }
}

/// Accumulated report lines, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Appends one line per worker to `report`, using the default layout
pub fn add_to_employee_report<T: AsEmployee>(workers: &[T], report: &mut Report) {
    add_to_employee_report_with(workers, report, &ReportLayout::default());
}

/// Appends one line per worker to `report`, using `layout`
pub fn add_to_employee_report_with<T: AsEmployee>(
    workers: &[T],
    report: &mut Report,
    layout: &ReportLayout,
) {
    for worker in workers {
        report.push(layout.format_line(worker));
    }
}

/// Writes every report line to `out`, one per line
pub fn display_report(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    for line in report.iter() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
