use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MONTHS_PER_QUARTER: u32 = 3;

/// 1-indexed calendar quarter containing `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / MONTHS_PER_QUARTER + 1
}

/// First calendar day of the quarter after the one containing `date`.
///
/// Q4 rolls over into Q1 of the following year. Returns `None` only when that
/// day falls outside the representable calendar range.
pub fn first_day_of_next_quarter(date: NaiveDate) -> Option<NaiveDate> {
    let (year, quarter) = match quarter_of(date) {
        4 => (date.year().checked_add(1)?, 1),
        current => (date.year(), current + 1),
    };
    let start_month = (quarter - 1) * MONTHS_PER_QUARTER + 1;
    NaiveDate::from_ymd_opt(year, start_month, 1)
}

/// Last calendar day of the quarter that starts on `first_day_of_quarter`.
///
/// This is the final day of the quarter's third month, so month lengths and
/// leap years come from the calendar rather than a table.
pub fn last_day_of_quarter(first_day_of_quarter: NaiveDate) -> Option<NaiveDate> {
    first_day_of_next_quarter(first_day_of_quarter)?.pred_opt()
}

/// Inclusive date range covering one calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QuarterWindow {
    /// The quarter following the one that contains `today`.
    pub fn following(today: NaiveDate) -> Option<Self> {
        let start = first_day_of_next_quarter(today)?;
        let end = last_day_of_quarter(start)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
