use super::super::domain::{Employee, Roster};
use super::super::quarter::QuarterWindow;
use chrono::NaiveDate;
use tracing::warn;

/// Unenrolled employees whose three-year anniversary lands next quarter.
#[derive(Debug)]
pub struct UpcomingEnrollees<'a> {
    pub window: Option<QuarterWindow>,
    pub employees: Vec<&'a Employee>,
}

pub fn upcoming_enrollees(roster: &Roster, today: NaiveDate) -> UpcomingEnrollees<'_> {
    let Some(window) = QuarterWindow::following(today) else {
        warn!(%today, "no calendar quarter follows the evaluation date");
        return UpcomingEnrollees {
            window: None,
            employees: Vec::new(),
        };
    };

    let mut employees: Vec<&Employee> = roster
        .employees()
        .iter()
        .filter(|employee| !employee.is_enrolled())
        .filter(|employee| {
            employee
                .three_year_anniversary()
                .is_some_and(|anniversary| window.contains(anniversary))
        })
        .collect();
    employees.sort_by(|a, b| b.employment_date.cmp(&a.employment_date));

    UpcomingEnrollees {
        window: Some(window),
        employees,
    }
}
