use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EmployeeLogic;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, paint};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { role } = cmd {
        let employees = EmployeeLogic::list(&cfg.store())?;

        let selected: Vec<&Employee> = employees
            .iter()
            .filter(|e| role.is_none_or(|r| e.role == r))
            .collect();

        if selected.is_empty() {
            info("No employees found.");
            return Ok(());
        }

        header(format!("Employees ({})", selected.len()));
        println!("{}", render(&selected));
    }

    Ok(())
}

fn render(employees: &[&Employee]) -> String {
    let mut table = Table::new(&["ID", "Name", "Role", "Empl.", "Room", "Days present", "Intern weeks"]);

    for e in employees {
        let present = e.availability.values().filter(|v| **v).count();
        let weeks: Vec<&str> = e
            .works_with_interns_weekly
            .iter()
            .filter(|(_, on)| **on)
            .map(|(w, _)| w.as_str())
            .collect();

        table.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            e.role.as_str().to_string(),
            e.employment.to_string(),
            e.room().map(str::to_string).unwrap_or_else(|| paint("--", GREY)),
            format!("{}/{}", present, e.availability.len()),
            if weeks.is_empty() {
                paint("--", GREY)
            } else {
                weeks.join(",")
            },
        ]);
    }

    table.render()
}
