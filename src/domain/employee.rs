//! Employee domain model
//!
//! Every worker shares one [`Employee`] record (ID + name). Categories wrap
//! that record instead of inheriting from it:
//!
//! ```text
//!              Employee
//!             /        \
//!          Staff     Developer
//!       (role tag)
//!    General | Security | Janitor
//! ```
//!
//! Code that only needs the shared fields is written against [`AsEmployee`],
//! which every category implements.

use serde::Serialize;
use std::io::{self, Write};

use super::id::{EmployeeId, IdAllocator};

/// The record shared by all employee categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
}

impl Employee {
    /// Creates an employee, taking the next ID from `ids`
    ///
    /// The name is stored as given; empty names are accepted.
    pub fn new(ids: &mut IdAllocator, name: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
        }
    }
}

/// Read access to the shared employee fields
///
/// This is the bound the report is written against: anything that can lend
/// out an [`Employee`] can be reported on, and nothing beyond the shared
/// fields is visible through it.
pub trait AsEmployee {
    /// Returns the shared employee record
    fn employee(&self) -> &Employee;

    fn id(&self) -> EmployeeId {
        self.employee().id
    }

    fn name(&self) -> &str {
        &self.employee().name
    }

    /// Returns the roll-call line, e.g. `Jim (#0) is Here!`
    fn presence_line(&self) -> String {
        format!("{} (#{}) is Here!", self.name(), self.id())
    }

    /// Writes the roll-call line to `out`
    fn announce_presence(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.presence_line())
    }
}

impl AsEmployee for Employee {
    fn employee(&self) -> &Employee {
        self
    }
}

impl<T: AsEmployee + ?Sized> AsEmployee for &T {
    fn employee(&self) -> &Employee {
        (**self).employee()
    }
}

/// A software developer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Developer(Employee);

impl Developer {
    pub fn new(ids: &mut IdAllocator, name: impl Into<String>) -> Self {
        Self(Employee::new(ids, name))
    }
}

impl AsEmployee for Developer {
    fn employee(&self) -> &Employee {
        &self.0
    }
}

/// Kind of staff member
///
/// Only general staff carry a configurable pass flag; security and janitors
/// always hold a unique pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    General { has_unique_pass: bool },
    Security,
    Janitor,
}

impl StaffRole {
    pub fn has_unique_pass(&self) -> bool {
        match self {
            StaffRole::General { has_unique_pass } => *has_unique_pass,
            StaffRole::Security | StaffRole::Janitor => true,
        }
    }

    /// Returns a display label for the role
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::General { .. } => "staff",
            StaffRole::Security => "security",
            StaffRole::Janitor => "janitor",
        }
    }
}

/// A staff member (general staff, security, or janitor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "StaffRecord")]
pub struct Staff {
    employee: Employee,
    role: StaffRole,
}

impl Staff {
    /// Creates a general staff member with an explicit pass flag
    pub fn new(ids: &mut IdAllocator, name: impl Into<String>, has_unique_pass: bool) -> Self {
        Self::with_role(ids, name, StaffRole::General { has_unique_pass })
    }

    /// Creates a security guard
    pub fn security(ids: &mut IdAllocator, name: impl Into<String>) -> Self {
        Self::with_role(ids, name, StaffRole::Security)
    }

    /// Creates a janitor
    pub fn janitor(ids: &mut IdAllocator, name: impl Into<String>) -> Self {
        Self::with_role(ids, name, StaffRole::Janitor)
    }

    fn with_role(ids: &mut IdAllocator, name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            employee: Employee::new(ids, name),
            role,
        }
    }

    pub fn role(&self) -> StaffRole {
        self.role
    }

    pub fn has_unique_pass(&self) -> bool {
        self.role.has_unique_pass()
    }
}

impl AsEmployee for Staff {
    fn employee(&self) -> &Employee {
        &self.employee
    }
}

/// Flat serialized form of [`Staff`]
#[derive(Serialize)]
struct StaffRecord {
    id: EmployeeId,
    name: String,
    role: &'static str,
    has_unique_pass: bool,
}

impl From<Staff> for StaffRecord {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.employee.id,
            role: staff.role.label(),
            has_unique_pass: staff.has_unique_pass(),
            name: staff.employee.name,
        }
    }
}
