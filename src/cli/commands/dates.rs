use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::WorkDay;
use crate::ui::messages::header;
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Dates { month } = cmd {
        let (year, month) = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        header(format!("Workdays {}-{:02}", year, month));
        for d in date::month_workdays(year, month) {
            let day = WorkDay::from_weekday(d.weekday())
                .map(|w| w.name())
                .unwrap_or_default();
            println!("{}  {}", date::format_date(d), day);
        }
    }

    Ok(())
}
