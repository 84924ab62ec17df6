use super::domain::{Employee, PensionPlan, Roster};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: column '{column}' has invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: column '{column}' has invalid amount '{value}'")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: employee id {id} appears more than once")]
    DuplicateId { row: usize, id: u64 },
}

/// Loads a roster from a CSV export with one employee per row.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Roster, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut employees = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            // Header is line 1.
            let row_number = index + 2;
            let employee = record?.into_employee(row_number)?;
            if !seen.insert(employee.id()) {
                return Err(RosterImportError::DuplicateId {
                    row: row_number,
                    id: employee.id(),
                });
            }
            if let Some(plan) = &employee.pension_plan {
                if plan.is_missing_reference() {
                    debug!(
                        employee_id = employee.id(),
                        "enrollment date recorded without plan reference"
                    );
                }
            }
            employees.push(employee);
        }

        Ok(Roster::new(employees))
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    first_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    employment_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    yearly_salary: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    plan_reference: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    enrollment_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    monthly_contribution: Option<String>,
}

impl RosterRow {
    fn into_employee(self, row: usize) -> Result<Employee, RosterImportError> {
        let employment_date = parse_date(row, "employment_date", &self.employment_date)?;
        let yearly_salary = self
            .yearly_salary
            .as_deref()
            .map(|raw| parse_amount(row, "yearly_salary", raw))
            .transpose()?;
        let enrollment_date = self
            .enrollment_date
            .as_deref()
            .map(|raw| parse_date(row, "enrollment_date", raw))
            .transpose()?;
        let monthly_contribution = self
            .monthly_contribution
            .as_deref()
            .map(|raw| parse_amount(row, "monthly_contribution", raw))
            .transpose()?;

        let has_plan = self.plan_reference.is_some()
            || enrollment_date.is_some()
            || monthly_contribution.is_some();
        let pension_plan = has_plan.then(|| {
            PensionPlan::new(self.plan_reference, enrollment_date, monthly_contribution)
        });

        Ok(Employee::new(
            self.id,
            self.first_name,
            self.last_name,
            employment_date,
            yearly_salary,
            pension_plan,
        ))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(row: usize, column: &'static str, raw: &str) -> Result<NaiveDate, RosterImportError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| RosterImportError::InvalidDate {
        row,
        column,
        value: raw.to_string(),
    })
}

fn parse_amount(row: usize, column: &'static str, raw: &str) -> Result<Decimal, RosterImportError> {
    Decimal::from_str(raw.trim()).map_err(|_| RosterImportError::InvalidAmount {
        row,
        column,
        value: raw.to_string(),
    })
}
