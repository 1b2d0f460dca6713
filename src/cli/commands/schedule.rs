use crate::cli::parser::{Commands, ScheduleKind};
use crate::config::Config;
use crate::core::Scheduler;
use crate::errors::AppResult;
use crate::models::WorkDay;
use crate::models::schedule::{DayRoomMap, GeneratedSchedule, RoomSchedule};
use crate::store::queries;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_availability, color_for_duty, color_for_presence, paint};
use crate::utils::table::Table;
use std::collections::BTreeSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { kind, json } = cmd {
        let employees = cfg.store().load_all()?;

        match kind {
            ScheduleKind::Generate => {
                let result = Scheduler::generate(&employees);
                if *json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    info(format!(
                        "{} seniors, {} interns",
                        queries::seniors(&employees).len(),
                        queries::interns(&employees).len()
                    ));
                    print_generated(&result);
                }
            }
            ScheduleKind::Interns => {
                let result = Scheduler::intern_senior(&employees)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print_room_schedule("Intern-senior availability", &result);
                }
            }
            ScheduleKind::Rooms => {
                let result = Scheduler::room_availability(&employees)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print_room_schedule("Room availability", &result);
                }
            }
        }
    }

    Ok(())
}

fn print_generated(result: &GeneratedSchedule) {
    header("Room schedule");
    let grid = day_grid(
        &result.schedule,
        |room| result.rooms.get(room).cloned().unwrap_or_default(),
        |p| paint(p.label(), color_for_presence(*p)),
    );
    println!("{}", grid.render());

    header("Office duty");
    let mut duty = Table::new(&["Day", "On duty"]);
    for (day, d) in &result.office_duty {
        duty.add_row(vec![day.name().to_string(), paint(d.label(), color_for_duty(d))]);
    }
    println!("{}", duty.render());
}

fn print_room_schedule(title: &str, result: &RoomSchedule) {
    header(title);
    let grid = day_grid(
        &result.schedule,
        |room| {
            result
                .rooms
                .get(room)
                .map(|id| id.to_string())
                .unwrap_or_default()
        },
        |a| paint(a.label(), color_for_availability(*a)),
    );
    println!("{}", grid.render());
}

/// Rooms as rows, days as columns.
fn day_grid<T, H, C>(schedule: &DayRoomMap<T>, holder: H, cell: C) -> Table
where
    H: Fn(&str) -> String,
    C: Fn(&T) -> String,
{
    let mut headers = vec!["Room".to_string(), "Holder".to_string()];
    headers.extend(WorkDay::ALL.iter().map(|d| d.name().to_string()));
    let mut table = Table::new(&headers);

    let rooms: BTreeSet<&String> = schedule.values().flat_map(|slots| slots.keys()).collect();
    for room in rooms {
        let mut row = vec![room.clone(), holder(room.as_str())];
        for day in WorkDay::ALL {
            row.push(
                schedule
                    .get(&day)
                    .and_then(|slots| slots.get(room))
                    .map(&cell)
                    .unwrap_or_default(),
            );
        }
        table.add_row(row);
    }

    table
}
