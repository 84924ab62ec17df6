use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;

/// Months of service after which an employee becomes eligible for enrollment.
pub const ELIGIBILITY_SERVICE_MONTHS: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionPlan {
    pub plan_reference_number: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub monthly_contribution: Option<Decimal>,
}

impl PensionPlan {
    pub fn new(
        plan_reference_number: Option<String>,
        enrollment_date: Option<NaiveDate>,
        monthly_contribution: Option<Decimal>,
    ) -> Self {
        Self {
            plan_reference_number,
            enrollment_date,
            monthly_contribution,
        }
    }

    /// True when the plan records an enrollment date but carries no reference.
    pub fn is_missing_reference(&self) -> bool {
        self.enrollment_date.is_some()
            && self
                .plan_reference_number
                .as_deref()
                .map_or(true, |reference| reference.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub yearly_salary: Option<Decimal>,
    pub pension_plan: Option<PensionPlan>,
}

impl Employee {
    pub fn new(
        id: u64,
        first_name: Option<String>,
        last_name: Option<String>,
        employment_date: NaiveDate,
        yearly_salary: Option<Decimal>,
        pension_plan: Option<PensionPlan>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            employment_date,
            yearly_salary,
            pension_plan,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_enrolled(&self) -> bool {
        self.pension_plan.is_some()
    }

    /// Employment date plus three calendar years. Feb 29 hires land on Feb 28
    /// in non-leap years.
    pub fn three_year_anniversary(&self) -> Option<NaiveDate> {
        self.employment_date
            .checked_add_months(Months::new(ELIGIBILITY_SERVICE_MONTHS))
    }
}

/// Immutable collection of employees produced by a loading step.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Optional value ordered so that every present value sorts before absence.
/// Two absent values compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NullsLast<T> {
    Present(T),
    Absent,
}

impl<T> From<Option<T>> for NullsLast<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Present(inner),
            None => Self::Absent,
        }
    }
}

impl<T: Ord> NullsLast<T> {
    pub fn compare(left: Option<T>, right: Option<T>) -> Ordering {
        NullsLast::from(left).cmp(&NullsLast::from(right))
    }
}
