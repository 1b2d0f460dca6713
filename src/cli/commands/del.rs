use super::edit::parse_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EmployeeLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let id = parse_id(id)?;
        EmployeeLogic::delete(&cfg.store(), id)?;
        success(format!("Employee {} has been deleted.", id));
    }

    Ok(())
}
