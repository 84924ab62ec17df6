use super::super::domain::{Employee, NullsLast, Roster};
use std::cmp::{Ordering, Reverse};

/// Every employee, highest salary first. Missing salaries trail the list and
/// ties fall back to last name, again with missing names last.
pub fn roster_listing(roster: &Roster) -> Vec<&Employee> {
    let mut employees: Vec<&Employee> = roster.employees().iter().collect();
    employees.sort_by(|a, b| compensation_order(a, b));
    employees
}

fn compensation_order(a: &Employee, b: &Employee) -> Ordering {
    NullsLast::compare(a.yearly_salary.map(Reverse), b.yearly_salary.map(Reverse))
        .then_with(|| NullsLast::compare(a.last_name.as_deref(), b.last_name.as_deref()))
}
