//! Domain models for the company roster
//!
//! Contains the employee categories and the company aggregate, without any
//! I/O concerns beyond writing roll-call lines to a caller-supplied writer.

mod id;
mod employee;
mod company;

pub use id::{EmployeeId, IdAllocator};
pub use employee::{AsEmployee, Developer, Employee, Staff, StaffRole};
pub use company::{Company, Meeting};
