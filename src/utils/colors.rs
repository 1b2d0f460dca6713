//! ANSI color helpers for terminal output.

use crate::models::schedule::{Availability, OfficeDuty, Presence};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Available for interns → green, present → cyan, absent → grey
pub fn color_for_presence(p: Presence) -> &'static str {
    match p {
        Presence::AvailableForInterns => GREEN,
        Presence::Present => CYAN,
        Presence::NotAvailable => GREY,
    }
}

pub fn color_for_availability(a: Availability) -> &'static str {
    match a {
        Availability::Available => GREEN,
        Availability::NotAvailable => RED,
    }
}

pub fn color_for_duty(d: &OfficeDuty) -> &'static str {
    match d {
        OfficeDuty::Assigned(_) => RESET,
        OfficeDuty::NoOneAvailable => YELLOW,
    }
}
