use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of the fixed five-day work week (Sunday through Thursday).
///
/// Ordering follows declaration order, so maps keyed by `WorkDay`
/// iterate and serialize Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl WorkDay {
    pub const ALL: [WorkDay; 5] = [
        WorkDay::Sunday,
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
    ];

    pub fn index(&self) -> usize {
        match self {
            WorkDay::Sunday => 0,
            WorkDay::Monday => 1,
            WorkDay::Tuesday => 2,
            WorkDay::Wednesday => 3,
            WorkDay::Thursday => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkDay::Sunday => "Sunday",
            WorkDay::Monday => "Monday",
            WorkDay::Tuesday => "Tuesday",
            WorkDay::Wednesday => "Wednesday",
            WorkDay::Thursday => "Thursday",
        }
    }

    /// Week bucket ("1".."4") used for the weekly intern flags.
    /// Sunday and Monday share bucket "1"; the rest get one bucket each.
    pub fn week_number(&self) -> &'static str {
        match self {
            WorkDay::Sunday | WorkDay::Monday => "1",
            WorkDay::Tuesday => "2",
            WorkDay::Wednesday => "3",
            WorkDay::Thursday => "4",
        }
    }

    /// Map a chrono weekday onto the work week; Friday and Saturday are off.
    pub fn from_weekday(wd: chrono::Weekday) -> Option<Self> {
        match wd {
            chrono::Weekday::Sun => Some(WorkDay::Sunday),
            chrono::Weekday::Mon => Some(WorkDay::Monday),
            chrono::Weekday::Tue => Some(WorkDay::Tuesday),
            chrono::Weekday::Wed => Some(WorkDay::Wednesday),
            chrono::Weekday::Thu => Some(WorkDay::Thursday),
            chrono::Weekday::Fri | chrono::Weekday::Sat => None,
        }
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Week bucket for a day index 0..=4; `None` outside the work week.
pub fn week_number_of(day_index: usize) -> Option<&'static str> {
    WorkDay::from_index(day_index).map(|d| d.week_number())
}
