//! Calendar windows used by the aggregators.
//!
//! Weeks start on Monday. All windows are inclusive date ranges; sessions are
//! dated, not timestamped, so a window is a pair of `NaiveDate`s.

use chrono::{Datelike, Duration, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Monday through Sunday around `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        Self::new(start_of_week(date), end_of_week(date))
    }

    pub fn month_of(date: NaiveDate) -> Self {
        Self::new(start_of_month(date), end_of_month(date))
    }

    pub fn year_of(date: NaiveDate) -> Self {
        Self::new(start_of_year(date), end_of_year(date))
    }

    /// Iterates every date in the window.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// The `count` calendar months ending with the month of `date`, oldest
/// first.
pub fn trailing_months(date: NaiveDate, count: u32) -> Vec<DateWindow> {
    let current = start_of_month(date);
    (0..count)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(DateWindow::month_of)
        .collect()
}
