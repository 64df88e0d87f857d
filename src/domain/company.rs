//! Company aggregate
//!
//! A company groups its people into three rosters, one per meeting type.
//! The rosters are independent: nothing stops the same person appearing in
//! more than one, and nothing links their orders.

use serde::Serialize;
use std::io::{self, Write};

use super::employee::{AsEmployee, Developer, Employee, Staff};

/// Which roster to call together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Meeting {
    /// Staff-only meeting
    Staff,
    /// Developer scrum
    Scrum,
    /// On-boarding for general employees
    Onboarding,
}

impl Meeting {
    pub const ALL: [Meeting; 3] = [Meeting::Staff, Meeting::Scrum, Meeting::Onboarding];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meeting::Staff => "staff",
            Meeting::Scrum => "scrum",
            Meeting::Onboarding => "onboarding",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Company {
    staff: Vec<Staff>,
    devs: Vec<Developer>,
    #[serde(rename = "general_employees")]
    general: Vec<Employee>,
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_staff(&mut self, staff: Staff) {
        self.staff.push(staff);
    }

    pub fn add_developer(&mut self, dev: Developer) {
        self.devs.push(dev);
    }

    pub fn add_general_employee(&mut self, employee: Employee) {
        self.general.push(employee);
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn devs(&self) -> &[Developer] {
        &self.devs
    }

    pub fn general(&self) -> &[Employee] {
        &self.general
    }

    /// Total entries across all rosters (a person on two rosters counts twice)
    pub fn headcount(&self) -> usize {
        self.staff.len() + self.devs.len() + self.general.len()
    }

    /// Roll call for the staff roster
    pub fn start_staff_meeting(&self, out: &mut dyn Write) -> io::Result<()> {
        roll_call(&self.staff, out)
    }

    /// Roll call for the developer roster
    pub fn start_developer_scrum(&self, out: &mut dyn Write) -> io::Result<()> {
        roll_call(&self.devs, out)
    }

    /// Roll call for the general employee roster
    pub fn start_onboarding(&self, out: &mut dyn Write) -> io::Result<()> {
        roll_call(&self.general, out)
    }

    /// Runs the given meeting
    pub fn hold(&self, meeting: Meeting, out: &mut dyn Write) -> io::Result<()> {
        match meeting {
            Meeting::Staff => self.start_staff_meeting(out),
            Meeting::Scrum => self.start_developer_scrum(out),
            Meeting::Onboarding => self.start_onboarding(out),
        }
    }

    /// Presence lines for the given meeting, in roster order
    pub fn attendance(&self, meeting: Meeting) -> Vec<String> {
        match meeting {
            Meeting::Staff => presence_lines(&self.staff),
            Meeting::Scrum => presence_lines(&self.devs),
            Meeting::Onboarding => presence_lines(&self.general),
        }
    }
}

fn roll_call<T: AsEmployee>(roster: &[T], out: &mut dyn Write) -> io::Result<()> {
    for member in roster {
        member.announce_presence(out)?;
    }
    Ok(())
}

fn presence_lines<T: AsEmployee>(roster: &[T]) -> Vec<String> {
    roster.iter().map(AsEmployee::presence_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;

    fn small_company() -> Company {
        let mut ids = IdAllocator::new();
        let mut company = Company::new();
        company.add_staff(Staff::janitor(&mut ids, "Jim"));
        company.add_staff(Staff::security(&mut ids, "Joe"));
        company.add_developer(Developer::new(&mut ids, "Rob"));
        company.add_general_employee(Employee::new(&mut ids, "NewGuy1"));
        company
    }

    fn meeting_output(company: &Company, meeting: Meeting) -> String {
        let mut out = Vec::new();
        company.hold(meeting, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rosters_keep_insertion_order() {
        let company = small_company();

        let names: Vec<_> = company.staff().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Jim", "Joe"]);
        assert_eq!(company.devs().len(), 1);
        assert_eq!(company.general().len(), 1);
        assert_eq!(company.headcount(), 4);
    }

    #[test]
    fn staff_meeting_announces_each_member() {
        let company = small_company();

        assert_eq!(
            meeting_output(&company, Meeting::Staff),
            "Jim (#0) is Here!\nJoe (#1) is Here!\n"
        );
    }

    #[test]
    fn scrum_and_onboarding_use_their_rosters() {
        let company = small_company();

        assert_eq!(meeting_output(&company, Meeting::Scrum), "Rob (#2) is Here!\n");
        assert_eq!(
            meeting_output(&company, Meeting::Onboarding),
            "NewGuy1 (#3) is Here!\n"
        );
    }

    #[test]
    fn empty_roster_meeting_prints_nothing() {
        let company = Company::new();

        assert_eq!(meeting_output(&company, Meeting::Staff), "");
        assert!(company.attendance(Meeting::Scrum).is_empty());
    }

    #[test]
    fn same_person_may_sit_on_two_rosters() {
        let mut ids = IdAllocator::new();
        let mut company = Company::new();
        let emp = Employee::new(&mut ids, "Pat");
        company.add_general_employee(emp.clone());
        company.add_general_employee(emp);

        assert_eq!(company.general().len(), 2);
        assert_eq!(company.general()[0], company.general()[1]);
    }

    #[test]
    fn attendance_matches_meeting_output() {
        let company = small_company();

        for meeting in Meeting::ALL {
            let printed: Vec<String> = meeting_output(&company, meeting)
                .lines()
                .map(str::to_string)
                .collect();
            assert_eq!(printed, company.attendance(meeting));
        }
    }
}
