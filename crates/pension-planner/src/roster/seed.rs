use super::domain::{Employee, PensionPlan, Roster};
use chrono::NaiveDate;
use rust_decimal::Decimal;

struct SeedPlan {
    reference: Option<&'static str>,
    enrolled_on: Option<NaiveDate>,
    monthly_cents: Option<i64>,
}

struct SeedEmployee {
    id: u64,
    first_name: &'static str,
    last_name: &'static str,
    hired_on: NaiveDate,
    salary_cents: i64,
    plan: Option<SeedPlan>,
}

const SEED_EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee {
        id: 1,
        first_name: "Daniel",
        last_name: "Agar",
        hired_on: ymd(2023, 1, 17),
        salary_cents: 10_594_550,
        plan: Some(SeedPlan {
            reference: Some("EX1089"),
            enrolled_on: None,
            monthly_cents: Some(10_000),
        }),
    },
    // Enrolled on record with no contribution yet.
    SeedEmployee {
        id: 2,
        first_name: "Benard",
        last_name: "Shaw",
        hired_on: ymd(2022, 9, 3),
        salary_cents: 19_775_000,
        plan: Some(SeedPlan {
            reference: Some("BN0001"),
            enrolled_on: Some(ymd(2025, 9, 3)),
            monthly_cents: None,
        }),
    },
    SeedEmployee {
        id: 3,
        first_name: "Carly",
        last_name: "Agar",
        hired_on: ymd(2014, 5, 16),
        salary_cents: 84_200_075,
        plan: Some(SeedPlan {
            reference: Some("SM2307"),
            enrolled_on: Some(ymd(2017, 5, 17)),
            monthly_cents: Some(155_550),
        }),
    },
    SeedEmployee {
        id: 4,
        first_name: "Wesley",
        last_name: "Schneider",
        hired_on: ymd(2023, 7, 21),
        salary_cents: 7_450_000,
        plan: None,
    },
    SeedEmployee {
        id: 5,
        first_name: "Anna",
        last_name: "Wiltord",
        hired_on: ymd(2020, 3, 15),
        salary_cents: 8_575_000,
        plan: None,
    },
    SeedEmployee {
        id: 6,
        first_name: "Yosef",
        last_name: "Tesfalem",
        hired_on: ymd(2020, 10, 31),
        salary_cents: 10_000_000,
        plan: None,
    },
    // Hires from Q4 2022 reach three years of service in Q4 2025.
    SeedEmployee {
        id: 7,
        first_name: "Quentin",
        last_name: "Reeves",
        hired_on: ymd(2022, 11, 15),
        salary_cents: 9_200_000,
        plan: None,
    },
    SeedEmployee {
        id: 8,
        first_name: "Lana",
        last_name: "Khan",
        hired_on: ymd(2022, 10, 5),
        salary_cents: 9_700_000,
        plan: None,
    },
    SeedEmployee {
        id: 9,
        first_name: "Marco",
        last_name: "Diaz",
        hired_on: ymd(2022, 10, 20),
        salary_cents: 8_800_000,
        plan: None,
    },
    SeedEmployee {
        id: 10,
        first_name: "Priya",
        last_name: "Singh",
        hired_on: ymd(2022, 11, 30),
        salary_cents: 10_250_000,
        plan: None,
    },
    SeedEmployee {
        id: 11,
        first_name: "Ethan",
        last_name: "Brown",
        hired_on: ymd(2022, 12, 1),
        salary_cents: 7_600_000,
        plan: None,
    },
    SeedEmployee {
        id: 12,
        first_name: "Zara",
        last_name: "Lopez",
        hired_on: ymd(2022, 12, 31),
        salary_cents: 9_350_000,
        plan: None,
    },
];

/// Built-in roster used when no external roster is configured.
pub fn seed_roster() -> Roster {
    Roster::new(SEED_EMPLOYEES.iter().map(SeedEmployee::build).collect())
}

/// Evaluated while building `SEED_EMPLOYEES`, so a bad date fails compilation.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

impl SeedPlan {
    fn build(&self) -> PensionPlan {
        PensionPlan::new(
            self.reference.map(str::to_owned),
            self.enrolled_on,
            self.monthly_cents.map(cents),
        )
    }
}

impl SeedEmployee {
    fn build(&self) -> Employee {
        Employee::new(
            self.id,
            Some(self.first_name.to_owned()),
            Some(self.last_name.to_owned()),
            self.hired_on,
            Some(cents(self.salary_cents)),
            self.plan.as_ref().map(SeedPlan::build),
        )
    }
}
