use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::store::{EmployeeStore, queries};
use crate::utils::date;
use tracing::info;
use uuid::Uuid;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// High-level roster operations on top of the employee store.
pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn list(store: &EmployeeStore) -> AppResult<Vec<Employee>> {
        store.load_all()
    }

    /// Append a new employee. The submitted id is discarded and a fresh one
    /// assigned. A record without availability is initialised for the
    /// current month's workdays.
    pub fn create(store: &EmployeeStore, mut employee: Employee) -> AppResult<Employee> {
        let mut employees = store.load_all()?;

        employee.id = Uuid::new_v4();
        if employee.availability.is_empty() {
            employee.initialize_monthly_availability(&date::current_month_workdays());
        }

        employees.push(employee.clone());
        store.save_all(&employees)?;

        info!(id = %employee.id, name = %employee.name, "employee created");
        Ok(employee)
    }

    /// Replace the record stored under `id`. The stored id always wins over
    /// whatever id the caller sent.
    pub fn update(store: &EmployeeStore, id: Uuid, mut employee: Employee) -> AppResult<Employee> {
        let mut employees = store.load_all()?;

        let idx = queries::position_by_id(&employees, id)
            .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND.into()))?;

        employee.id = id;
        employees[idx] = employee.clone();
        store.save_all(&employees)?;

        info!(%id, "employee updated");
        Ok(employee)
    }

    pub fn delete(store: &EmployeeStore, id: Uuid) -> AppResult<()> {
        let employees = store.load_all()?;
        let before = employees.len();

        let remaining: Vec<Employee> = employees.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            return Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.into()));
        }

        store.save_all(&remaining)?;
        info!(%id, "employee deleted");
        Ok(())
    }

    /// Fails with `Conflict` when a senior already holds `room`.
    pub fn validate_room(store: &EmployeeStore, room: &str) -> AppResult<()> {
        let employees = store.load_all()?;
        Self::check_room_free(&employees, room)
    }

    pub fn check_room_free(employees: &[Employee], room: &str) -> AppResult<()> {
        match queries::senior_in_room(employees, room) {
            Some(holder) => Err(AppError::Conflict(format!(
                "Room {} is already assigned to {}",
                room, holder.name
            ))),
            None => Ok(()),
        }
    }
}
