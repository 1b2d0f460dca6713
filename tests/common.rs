#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use roomroster::models::{Employee, Employment, Role};
use roomroster::store::EmployeeStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rr() -> Command {
    cargo_bin_cmd!("roomroster")
}

/// Unique data file path inside the system temp dir, removed if present
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roomroster_employees.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn store(name: &str) -> EmployeeStore {
    EmployeeStore::new(setup_test_store(name))
}

pub fn senior(name: &str, room: Option<&str>) -> Employee {
    Employee::new(name, Role::Senior, Employment::Full, room.map(str::to_string))
}

pub fn intern(name: &str) -> Employee {
    Employee::new(name, Role::Intern, Employment::Partial, None)
}

pub fn with_days(mut e: Employee, days: &[(&str, bool)]) -> Employee {
    for (k, v) in days {
        e.availability.insert(k.to_string(), *v);
    }
    e
}

pub fn with_weeks(mut e: Employee, weeks: &[(&str, bool)]) -> Employee {
    for (k, v) in weeks {
        e.works_with_interns_weekly.insert(k.to_string(), *v);
    }
    e
}
