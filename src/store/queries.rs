//! Lookups over an in-memory employee snapshot.

use crate::models::Employee;
use uuid::Uuid;

pub fn position_by_id(employees: &[Employee], id: Uuid) -> Option<usize> {
    employees.iter().position(|e| e.id == id)
}

pub fn find_by_id(employees: &[Employee], id: Uuid) -> Option<&Employee> {
    employees.iter().find(|e| e.id == id)
}

/// Senior currently holding `room`, if any.
pub fn senior_in_room<'a>(employees: &'a [Employee], room: &str) -> Option<&'a Employee> {
    employees
        .iter()
        .find(|e| e.is_senior() && e.room_number.as_deref() == Some(room))
}

pub fn seniors(employees: &[Employee]) -> Vec<&Employee> {
    employees.iter().filter(|e| e.is_senior()).collect()
}

pub fn interns(employees: &[Employee]) -> Vec<&Employee> {
    employees.iter().filter(|e| !e.is_senior()).collect()
}
