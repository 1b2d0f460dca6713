//! Scheduling engine: derives room, office-duty and intern-pairing views
//! from a roster snapshot.
//!
//! All operations are pure functions of their input. They never touch the
//! store and keep no state between calls.

use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::models::WorkDay;
use crate::models::schedule::{
    Availability, DayRoomMap, GeneratedSchedule, OfficeDuty, Presence, RoomSchedule,
};
use crate::store::queries;
use crate::utils::date;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use uuid::Uuid;

pub struct Scheduler;

impl Scheduler {
    /// Weekly room presence plus a greedy office-duty pick.
    ///
    /// Availability is looked up by weekday *name* ("Monday"), unlike the two
    /// reset schedules which use ISO dates. Both lookups are kept as-is.
    pub fn generate(employees: &[Employee]) -> GeneratedSchedule {
        let seniors = queries::seniors(employees);

        let mut rooms = BTreeMap::new();
        for senior in &seniors {
            if let Some(room) = senior.room() {
                rooms.insert(room.to_string(), senior.name.clone());
            }
        }

        let mut schedule: DayRoomMap<Presence> = WorkDay::ALL
            .iter()
            .map(|day| (*day, BTreeMap::new()))
            .collect();

        for day in WorkDay::ALL {
            let week = day.week_number();
            let slots = schedule.entry(day).or_default();

            for senior in &seniors {
                let Some(room) = senior.room() else {
                    continue;
                };

                let with_interns = senior.works_with_interns(week);
                let present = senior.is_available(day.name());

                let status = match (present, with_interns) {
                    (true, true) => Presence::AvailableForInterns,
                    (true, false) => Presence::Present,
                    (false, _) => Presence::NotAvailable,
                };
                slots.insert(room.to_string(), status);
            }
        }

        let office_duty = WorkDay::ALL
            .iter()
            .map(|day| {
                let duty = seniors
                    .iter()
                    .find(|s| s.is_available(day.name()))
                    .map(|s| OfficeDuty::Assigned(s.name.clone()))
                    .unwrap_or(OfficeDuty::NoOneAvailable);
                (*day, duty)
            })
            .collect();

        GeneratedSchedule {
            schedule,
            office_duty,
            rooms,
        }
    }

    /// Which seniors can take interns on each day of the anchor week.
    ///
    /// A senior not working with interns in a day's week bucket is
    /// "Not Available" regardless of presence.
    pub fn intern_senior(employees: &[Employee]) -> AppResult<RoomSchedule> {
        Self::anchored(employees, |senior, day, date| {
            if !senior.works_with_interns(day.week_number()) {
                return Availability::NotAvailable;
            }
            if senior.is_available_on(date) {
                Availability::Available
            } else {
                Availability::NotAvailable
            }
        })
    }

    /// Whether each senior's room is free on each day of the anchor week.
    /// A room is free when its holder is absent; intern flags are ignored.
    pub fn room_availability(employees: &[Employee]) -> AppResult<RoomSchedule> {
        Self::anchored(employees, |senior, _day, date| {
            if senior.is_available_on(date) {
                Availability::NotAvailable
            } else {
                Availability::Available
            }
        })
    }

    /// Shared walk over the five calendar days starting at the anchor Sunday.
    fn anchored<F>(employees: &[Employee], status: F) -> AppResult<RoomSchedule>
    where
        F: Fn(&Employee, WorkDay, NaiveDate) -> Availability,
    {
        let rooms = room_holders(employees);
        let anchor = date::schedule_anchor()
            .ok_or_else(|| AppError::InvalidDate("schedule anchor".into()))?;

        let mut schedule: DayRoomMap<Availability> = BTreeMap::new();
        for (day, date) in WorkDay::ALL.into_iter().zip(anchor.iter_days()) {
            let slots = schedule.entry(day).or_default();
            for (room, senior_id) in &rooms {
                let senior = resolve_senior(employees, *senior_id, room)?;
                slots.insert(room.clone(), status(senior, day, date));
            }
        }

        Ok(RoomSchedule { rooms, schedule })
    }
}

/// room → id of the senior holding it. A later senior with the same room
/// replaces an earlier one.
fn room_holders(employees: &[Employee]) -> BTreeMap<String, Uuid> {
    let mut rooms = BTreeMap::new();
    for senior in queries::seniors(employees) {
        if let Some(room) = senior.room() {
            rooms.insert(room.to_string(), senior.id);
        }
    }
    rooms
}

fn resolve_senior<'a>(employees: &'a [Employee], id: Uuid, room: &str) -> AppResult<&'a Employee> {
    queries::find_by_id(employees, id)
        .filter(|e| e.is_senior())
        .ok_or_else(|| {
            AppError::LookupInconsistency(format!(
                "room {} references unknown senior {}",
                room, id
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employment, Role};

    #[test]
    fn unknown_room_holder_is_a_lookup_error() {
        let roster = vec![Employee::new("Dana", Role::Senior, Employment::Full, Some("101".into()))];

        let err = resolve_senior(&roster, Uuid::new_v4(), "101").unwrap_err();
        assert!(matches!(err, AppError::LookupInconsistency(_)));
        assert!(err.to_string().contains("room 101"));
    }

    #[test]
    fn room_holder_must_be_a_senior() {
        let ivy = Employee::new("Ivy", Role::Intern, Employment::Partial, Some("303".into()));
        let roster = vec![ivy.clone()];

        assert!(resolve_senior(&roster, ivy.id, "303").is_err());
    }

    #[test]
    fn known_senior_resolves() {
        let dana = Employee::new("Dana", Role::Senior, Employment::Full, Some("101".into()));
        let roster = vec![dana.clone()];

        assert_eq!(resolve_senior(&roster, dana.id, "101").unwrap().name, "Dana");
    }
}
