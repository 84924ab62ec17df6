use chrono::NaiveDate;
use pension_planner::roster::{
    first_day_of_next_quarter, last_day_of_quarter, render_json, roster_listing, seed_roster,
    upcoming_enrollees, Employee, PensionPlan, Roster, RosterImporter,
};
use rust_decimal::Decimal;
use serde_json::Value;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    let mut out = Vec::new();
    render_json(value, &mut out).expect("report renders");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn listing_serializes_nested_plans_dates_and_exact_amounts() {
    let roster = seed_roster();
    let listing = roster_listing(&roster);
    let rendered = to_json(&listing);
    let value: Value = serde_json::from_str(&rendered).expect("valid json");

    let carly = &value[0];
    assert_eq!(carly["id"].as_u64(), Some(3));
    assert_eq!(carly["firstName"], "Carly");
    assert_eq!(carly["lastName"], "Agar");
    assert_eq!(carly["employmentDate"], "2014-05-16");
    assert!(carly["yearlySalary"].is_number());
    assert_eq!(carly["yearlySalary"].to_string(), "842000.75");
    let plan = &carly["pensionPlan"];
    assert_eq!(plan["planReferenceNumber"], "SM2307");
    assert_eq!(plan["enrollmentDate"], "2017-05-17");
    assert!(plan["monthlyContribution"].is_number());
    assert_eq!(plan["monthlyContribution"].to_string(), "1555.50");

    let shaw = &value[1];
    assert_eq!(shaw["lastName"], "Shaw");
    assert_eq!(shaw["pensionPlan"]["monthlyContribution"], Value::Null);

    let daniel = &value[2];
    assert_eq!(daniel["yearlySalary"].to_string(), "105945.50");
    assert_eq!(daniel["pensionPlan"]["enrollmentDate"], Value::Null);

    let last = &value[11];
    assert_eq!(last["lastName"], "Schneider");
    assert_eq!(last["pensionPlan"], Value::Null);
}

#[test]
fn amounts_render_as_unquoted_exact_numbers() {
    let roster = seed_roster();
    let rendered = to_json(&roster_listing(&roster));

    assert!(rendered.contains("\"yearlySalary\": 105945.50,"));
    assert!(rendered.contains("\"yearlySalary\": 197750.00,"));
    assert!(rendered.contains("\"monthlyContribution\": 1555.50"));
    assert!(rendered.contains("\"monthlyContribution\": null"));
    assert!(!rendered.contains("\"105945.50\""));
}

#[test]
fn output_is_indented() {
    let roster = seed_roster();
    let rendered = to_json(&roster_listing(&roster));
    assert!(rendered.starts_with("[\n  {\n    \"id\": 3,"));
    assert!(rendered.ends_with("]\n"));
}

#[test]
fn listing_breaks_salary_ties_by_last_name() {
    let salary = Some(Decimal::new(19_775_000, 2));
    let roster = Roster::new(vec![
        Employee::new(2, None, Some("Shaw".into()), date(2022, 9, 3), salary, None),
        Employee::new(1, None, Some("Agar".into()), date(2023, 1, 17), salary, None),
    ]);

    let names: Vec<_> = roster_listing(&roster)
        .iter()
        .map(|employee| employee.last_name.clone())
        .collect();
    assert_eq!(names, vec![Some("Agar".to_string()), Some("Shaw".to_string())]);
}

#[test]
fn listing_pairs_respect_salary_then_name_order() {
    let roster = seed_roster();
    let listing = roster_listing(&roster);
    assert_eq!(listing.len(), roster.len());

    for pair in listing.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        match (first.yearly_salary, second.yearly_salary) {
            (Some(a), Some(b)) => {
                assert!(a >= b);
                if a == b {
                    assert!(first.last_name <= second.last_name);
                }
            }
            (None, Some(_)) => panic!("absent salary sorted before a present one"),
            _ => {}
        }
    }
}

#[test]
fn upcoming_matches_reference_scenario() {
    let today = date(2025, 8, 20);
    let start = first_day_of_next_quarter(today).expect("next quarter");
    let end = last_day_of_quarter(start).expect("quarter end");
    assert_eq!((start, end), (date(2025, 10, 1), date(2025, 12, 31)));

    let roster = seed_roster();
    let report = upcoming_enrollees(&roster, today);
    let ids: Vec<u64> = report.employees.iter().map(|employee| employee.id()).collect();
    assert_eq!(ids, vec![12, 11, 10, 7, 9, 8]);

    for employee in &report.employees {
        assert!(employee.pension_plan.is_none());
        let anniversary = employee.three_year_anniversary().expect("anniversary");
        assert!(start <= anniversary && anniversary <= end);
    }
    assert!(!ids.contains(&1), "enrolled employee must not appear");
}

#[test]
fn upcoming_excludes_outside_window_and_enrolled() {
    let roster = Roster::new(vec![
        Employee::new(1, None, Some("Early".into()), date(2022, 9, 30), None, None),
        Employee::new(
            2,
            None,
            Some("Enrolled".into()),
            date(2022, 11, 1),
            None,
            Some(PensionPlan::new(None, Some(date(2025, 9, 3)), None)),
        ),
        Employee::new(3, None, Some("Late".into()), date(2023, 1, 1), None, None),
    ]);
    let report = upcoming_enrollees(&roster, date(2025, 8, 20));
    assert_eq!(to_json(&report.employees), "[]\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let roster = seed_roster();
    let today = date(2025, 8, 20);

    assert_eq!(
        to_json(&roster_listing(&roster)),
        to_json(&roster_listing(&roster))
    );
    assert_eq!(
        to_json(&upcoming_enrollees(&roster, today).employees),
        to_json(&upcoming_enrollees(&roster, today).employees)
    );
}

#[test]
fn imported_roster_feeds_both_reports() {
    let csv = "id,first_name,last_name,employment_date,yearly_salary,plan_reference,enrollment_date,monthly_contribution\n\
7,Quentin,Reeves,2022-11-15,92000.00,,,\n\
1,Daniel,Agar,2023-01-17,105945.50,EX1089,,100.00\n\
13,Nadia,,2022-12-10,,,,\n";
    let roster = RosterImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    let listed: Vec<u64> = roster_listing(&roster)
        .iter()
        .map(|employee| employee.id())
        .collect();
    assert_eq!(listed, vec![1, 7, 13]);

    let upcoming: Vec<u64> = upcoming_enrollees(&roster, date(2025, 8, 20))
        .employees
        .iter()
        .map(|employee| employee.id())
        .collect();
    assert_eq!(upcoming, vec![13, 7]);
}

#[test]
fn sample_export_matches_built_in_roster() {
    let data = include_bytes!("../sample_roster.csv");
    let imported = RosterImporter::from_reader(&data[..]).expect("sample imports");
    let seeded = seed_roster();

    assert_eq!(imported.employees(), seeded.employees());
    assert_eq!(
        to_json(&roster_listing(&imported)),
        to_json(&roster_listing(&seeded))
    );
}
