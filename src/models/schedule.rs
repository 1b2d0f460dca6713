//! Transient schedule artifacts returned by the scheduling engine.
//! Nothing here is ever persisted.

use super::workday::WorkDay;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Room status in the generated weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Presence {
    #[serde(rename = "Available for interns")]
    AvailableForInterns,
    #[serde(rename = "Present")]
    Present,
    #[serde(rename = "Not available")]
    NotAvailable,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::AvailableForInterns => "Available for interns",
            Presence::Present => "Present",
            Presence::NotAvailable => "Not available",
        }
    }
}

/// Room status in the intern-senior and room reset schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::NotAvailable => "Not Available",
        }
    }
}

pub const NO_ONE_AVAILABLE: &str = "No one available";

/// Who covers the office on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficeDuty {
    Assigned(String),
    NoOneAvailable,
}

impl OfficeDuty {
    pub fn label(&self) -> &str {
        match self {
            OfficeDuty::Assigned(name) => name,
            OfficeDuty::NoOneAvailable => NO_ONE_AVAILABLE,
        }
    }
}

impl Serialize for OfficeDuty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// day → room → status
pub type DayRoomMap<T> = BTreeMap<WorkDay, BTreeMap<String, T>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSchedule {
    pub schedule: DayRoomMap<Presence>,
    pub office_duty: BTreeMap<WorkDay, OfficeDuty>,
    /// room → senior name
    pub rooms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSchedule {
    /// room → senior id
    pub rooms: BTreeMap<String, Uuid>,
    pub schedule: DayRoomMap<Availability>,
}
