//! Calendar helpers: today, date parsing and the workday enumeration.

use crate::models::WorkDay;
use chrono::{Datelike, Days, NaiveDate};

/// Number of month-calendar rows that make up the planning month.
const PLANNING_WEEKS: u64 = 4;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// Workdays (Sunday..Thursday) of the first four calendar rows of a month.
///
/// Rows are Monday-bounded, the first row being the one that holds the 1st.
/// Days of neighbouring months are skipped, so the result always has
/// between 16 and 20 dates.
pub fn month_workdays(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let back = first.weekday().num_days_from_monday() as u64;
    let Some(row_start) = first.checked_sub_days(Days::new(back)) else {
        return Vec::new();
    };

    row_start
        .iter_days()
        .take((PLANNING_WEEKS * 7) as usize)
        .filter(|d| d.month() == month && d.year() == year)
        .filter(|d| WorkDay::from_weekday(d.weekday()).is_some())
        .collect()
}

pub fn current_month_workdays() -> Vec<NaiveDate> {
    let today = today();
    month_workdays(today.year(), today.month())
}

/// First Sunday of March 2025. The intern-senior and room reset schedules
/// always read availability for the five days starting here.
pub fn schedule_anchor() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 3, 2)
}
