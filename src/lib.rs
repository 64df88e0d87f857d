//! Company Roster - employee rosters and a generic employee report
//!
//! A company keeps its people in three rosters (staff, developers, general
//! employees). One report function, bounded by [`AsEmployee`], accepts any of
//! them and appends a formatted line per member.

pub mod domain;
pub mod report;
pub mod config;
pub mod demo;
pub mod cli;

pub use domain::{AsEmployee, Company, Developer, Employee, EmployeeId, IdAllocator, Staff, StaffRole};
pub use report::{add_to_employee_report, display_report, Report, ReportLayout};
