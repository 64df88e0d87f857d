//! Sample company used by the `roster` commands

use crate::domain::{Company, Developer, Employee, IdAllocator, Staff};
use crate::report::{add_to_employee_report_with, Report, ReportLayout};

/// Builds the sample company
///
/// Construction order is janitor, security, general staff, three developers,
/// then three new hires, so a fresh allocator hands out IDs 0 through 8 in
/// that order.
pub fn sample_company(ids: &mut IdAllocator) -> Company {
    let mut company = Company::new();

    company.add_staff(Staff::janitor(ids, "Jim"));
    company.add_staff(Staff::security(ids, "Joe"));
    company.add_staff(Staff::new(ids, "Jake", false));

    company.add_developer(Developer::new(ids, "Rob"));
    company.add_developer(Developer::new(ids, "Bob"));
    company.add_developer(Developer::new(ids, "Tod"));

    company.add_general_employee(Employee::new(ids, "NewGuy1"));
    company.add_general_employee(Employee::new(ids, "NewGuy2"));
    company.add_general_employee(Employee::new(ids, "NewGuy3"));

    company
}

/// Reports developers, then staff, then general employees into one report
pub fn build_report(company: &Company, layout: &ReportLayout) -> Report {
    let mut report = Report::new();

    add_to_employee_report_with(company.devs(), &mut report, layout);
    add_to_employee_report_with(company.staff(), &mut report, layout);
    add_to_employee_report_with(company.general(), &mut report, layout);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AsEmployee;

    #[test]
    fn sample_ids_follow_construction_order() {
        let mut ids = IdAllocator::new();
        let company = sample_company(&mut ids);

        let staff_ids: Vec<u32> = company.staff().iter().map(|s| s.id().value()).collect();
        let dev_ids: Vec<u32> = company.devs().iter().map(|d| d.id().value()).collect();
        let general_ids: Vec<u32> = company.general().iter().map(|e| e.id().value()).collect();

        assert_eq!(staff_ids, vec![0, 1, 2]);
        assert_eq!(dev_ids, vec![3, 4, 5]);
        assert_eq!(general_ids, vec![6, 7, 8]);
        assert_eq!(ids.issued(), 9);
    }

    #[test]
    fn sample_staff_passes() {
        let mut ids = IdAllocator::new();
        let company = sample_company(&mut ids);

        let passes: Vec<bool> = company.staff().iter().map(|s| s.has_unique_pass()).collect();
        assert_eq!(passes, vec![true, true, false]);
    }

    #[test]
    fn report_orders_devs_staff_general() {
        let mut ids = IdAllocator::new();
        let company = sample_company(&mut ids);

        let report = build_report(&company, &ReportLayout::default());

        assert_eq!(
            report.lines(),
            &[
                "Name: Rob        Id:   3",
                "Name: Bob        Id:   4",
                "Name: Tod        Id:   5",
                "Name: Jim        Id:   0",
                "Name: Joe        Id:   1",
                "Name: Jake       Id:   2",
                "Name: NewGuy1    Id:   6",
                "Name: NewGuy2    Id:   7",
                "Name: NewGuy3    Id:   8",
            ]
        );
    }

    #[test]
    fn second_company_continues_the_sequence() {
        let mut ids = IdAllocator::new();
        let _first = sample_company(&mut ids);
        let second = sample_company(&mut ids);

        assert_eq!(second.staff()[0].id().value(), 9);
    }
}
