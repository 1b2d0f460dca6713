use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EmployeeLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Employment};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        role,
        employment,
        room,
    } = cmd
    {
        let employment = Employment::try_from(*employment).map_err(AppError::InvalidEmployee)?;
        let store = cfg.store();

        let room = room.clone().filter(|r| !r.trim().is_empty());
        if let Some(r) = &room {
            if !role.is_senior() {
                warning(format!("Room {} assigned to an intern is ignored by the planner", r));
            } else {
                EmployeeLogic::validate_room(&store, r)?;
            }
        }

        let created = EmployeeLogic::create(&store, Employee::new(name, *role, employment, room))?;

        success(format!(
            "Added {} '{}' with id {}",
            created.role.as_str(),
            created.name,
            created.id
        ));
    }

    Ok(())
}
