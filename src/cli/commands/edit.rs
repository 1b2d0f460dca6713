use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EmployeeLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, WorkDay};
use crate::store::queries;
use crate::ui::messages::success;
use crate::utils::date;
use uuid::Uuid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        room,
        available,
        unavailable,
        interns_week,
        no_interns_week,
    } = cmd
    {
        let id = parse_id(id)?;
        let store = cfg.store();
        let employees = store.load_all()?;

        let mut employee = queries::find_by_id(&employees, id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(crate::core::employees::EMPLOYEE_NOT_FOUND.into()))?;

        if let Some(n) = name {
            employee.name = n.clone();
        }

        if let Some(r) = room {
            let r = r.trim();
            if r.is_empty() {
                employee.room_number = None;
            } else {
                if employee.room() != Some(r) {
                    EmployeeLogic::check_room_free(&employees, r)?;
                }
                employee.room_number = Some(r.to_string());
            }
        }

        for day in available {
            set_availability(&mut employee, day, true)?;
        }
        for day in unavailable {
            set_availability(&mut employee, day, false)?;
        }
        for week in interns_week {
            set_interns_week(&mut employee, *week, true)?;
        }
        for week in no_interns_week {
            set_interns_week(&mut employee, *week, false)?;
        }

        let updated = EmployeeLogic::update(&store, id, employee)?;
        success(format!("Updated '{}' ({})", updated.name, updated.id));
    }

    Ok(())
}

pub fn parse_id(s: &str) -> AppResult<Uuid> {
    Uuid::parse_str(s.trim())
        .map_err(|_| AppError::InvalidEmployee(format!("'{}' is not a valid employee id", s)))
}

/// Accepts an ISO date or a workday name ("monday", "Sunday", ...).
fn availability_key(day: &str) -> AppResult<String> {
    if let Some(d) = date::parse_date(day) {
        return Ok(date::format_date(d));
    }

    WorkDay::ALL
        .iter()
        .find(|w| w.name().eq_ignore_ascii_case(day))
        .map(|w| w.name().to_string())
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))
}

fn set_availability(employee: &mut Employee, day: &str, present: bool) -> AppResult<()> {
    let key = availability_key(day)?;
    employee.availability.insert(key, present);
    Ok(())
}

fn set_interns_week(employee: &mut Employee, week: u8, on: bool) -> AppResult<()> {
    if !(1..=4).contains(&week) {
        return Err(AppError::InvalidEmployee(format!(
            "week must be between 1 and 4, got {}",
            week
        )));
    }
    employee
        .works_with_interns_weekly
        .insert(week.to_string(), on);
    Ok(())
}
