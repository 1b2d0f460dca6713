use super::{employment::Employment, role::Role};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A staff member as persisted in the employee store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub employment: Employment,
    #[serde(default)]
    pub room_number: Option<String>,
    /// "YYYY-MM-DD" (or a weekday name, see `Scheduler::generate`) → present.
    #[serde(default)]
    pub availability: BTreeMap<String, bool>,
    /// Week bucket "1".."4" → works with interns that week. Seniors only.
    #[serde(default)]
    pub works_with_interns_weekly: BTreeMap<String, bool>,
}

impl Employee {
    pub fn new(name: &str, role: Role, employment: Employment, room_number: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role,
            employment,
            room_number,
            availability: BTreeMap::new(),
            works_with_interns_weekly: BTreeMap::new(),
        }
    }

    pub fn is_senior(&self) -> bool {
        self.role.is_senior()
    }

    /// Room held by this employee, ignoring empty strings.
    pub fn room(&self) -> Option<&str> {
        self.room_number.as_deref().filter(|r| !r.is_empty())
    }

    /// Missing keys count as unavailable.
    pub fn is_available(&self, key: &str) -> bool {
        self.availability.get(key).copied().unwrap_or(false)
    }

    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.is_available(&date.format("%Y-%m-%d").to_string())
    }

    /// Missing weeks count as not working with interns.
    pub fn works_with_interns(&self, week: &str) -> bool {
        self.works_with_interns_weekly
            .get(week)
            .copied()
            .unwrap_or(false)
    }

    /// Reset availability to "absent" for every given workday; seniors also
    /// get all four weekly intern flags switched on.
    pub fn initialize_monthly_availability(&mut self, dates: &[NaiveDate]) {
        self.availability = dates
            .iter()
            .map(|d| (d.format("%Y-%m-%d").to_string(), false))
            .collect();

        if self.is_senior() {
            self.works_with_interns_weekly = (1..=4).map(|w| (w.to_string(), true)).collect();
        }
    }
}
