use roomroster::core::Scheduler;
use roomroster::models::WorkDay;
use roomroster::models::schedule::{Availability, OfficeDuty, Presence};
use serde_json::json;

mod common;
use common::{intern, senior, with_days, with_weeks};

#[test]
fn test_generate_empty_roster() {
    let result = Scheduler::generate(&[]);

    assert!(result.rooms.is_empty());
    assert_eq!(result.schedule.len(), 5);
    assert!(result.schedule.values().all(|slots| slots.is_empty()));
    for day in WorkDay::ALL {
        assert_eq!(result.office_duty[&day], OfficeDuty::NoOneAvailable);
    }
}

#[test]
fn test_generate_available_for_interns_vs_present() {
    let base = with_days(senior("Dana", Some("101")), &[("Monday", true)]);

    let with_interns = with_weeks(base.clone(), &[("1", true)]);
    let result = Scheduler::generate(&[with_interns]);
    assert_eq!(
        result.schedule[&WorkDay::Monday]["101"],
        Presence::AvailableForInterns
    );
    assert_eq!(result.schedule[&WorkDay::Sunday]["101"], Presence::NotAvailable);

    let without_interns = with_weeks(base, &[("1", false)]);
    let result = Scheduler::generate(&[without_interns]);
    assert_eq!(result.schedule[&WorkDay::Monday]["101"], Presence::Present);
}

#[test]
fn test_generate_uses_weekday_names_not_dates() {
    // ISO date keys are ignored by the weekly view
    let dana = with_weeks(
        with_days(senior("Dana", Some("101")), &[("2025-03-03", true)]),
        &[("1", true)],
    );
    let result = Scheduler::generate(&[dana]);
    assert_eq!(result.schedule[&WorkDay::Monday]["101"], Presence::NotAvailable);
    assert_eq!(result.office_duty[&WorkDay::Monday], OfficeDuty::NoOneAvailable);
}

#[test]
fn test_generate_rooms_exclude_roomless_and_interns() {
    let roster = vec![
        senior("Dana", Some("101")),
        senior("Eli", None),
        senior("Fay", Some("")),
        intern("Gil"),
    ];
    let result = Scheduler::generate(&roster);

    assert_eq!(result.rooms.len(), 1);
    assert_eq!(result.rooms["101"], "Dana");
    assert!(result.schedule.values().all(|slots| slots.len() == 1));
}

#[test]
fn test_office_duty_picks_first_available_in_input_order() {
    let zed = with_days(senior("Zed", None), &[("Tuesday", true), ("Sunday", true)]);
    let amy = with_days(senior("Amy", Some("102")), &[("Tuesday", true), ("Monday", true)]);
    let ivy = with_days(intern("Ivy"), &[("Wednesday", true)]);

    let result = Scheduler::generate(&[zed, amy, ivy]);

    assert_eq!(result.office_duty[&WorkDay::Sunday], OfficeDuty::Assigned("Zed".into()));
    assert_eq!(result.office_duty[&WorkDay::Monday], OfficeDuty::Assigned("Amy".into()));
    assert_eq!(result.office_duty[&WorkDay::Tuesday], OfficeDuty::Assigned("Zed".into()));
    // interns never take office duty
    assert_eq!(result.office_duty[&WorkDay::Wednesday], OfficeDuty::NoOneAvailable);
}

#[test]
fn test_generate_week_buckets() {
    // Tuesday reads week "2", Thursday week "4"
    let dana = with_weeks(
        with_days(
            senior("Dana", Some("101")),
            &[("Tuesday", true), ("Thursday", true)],
        ),
        &[("2", true), ("4", false)],
    );
    let result = Scheduler::generate(&[dana]);
    assert_eq!(
        result.schedule[&WorkDay::Tuesday]["101"],
        Presence::AvailableForInterns
    );
    assert_eq!(result.schedule[&WorkDay::Thursday]["101"], Presence::Present);
}

#[test]
fn test_generate_is_repeatable() {
    let roster = vec![
        with_weeks(
            with_days(senior("Dana", Some("101")), &[("Monday", true)]),
            &[("1", true)],
        ),
        with_days(senior("Eli", Some("102")), &[("Sunday", true)]),
    ];

    let first = Scheduler::generate(&roster);
    let second = Scheduler::generate(&roster);
    assert_eq!(first, second);

    let smaller = Scheduler::generate(&roster[..1]);
    assert!(!smaller.rooms.contains_key("102"));
}

#[test]
fn test_generate_json_shape() {
    let dana = with_weeks(
        with_days(senior("Dana", Some("101")), &[("Monday", true)]),
        &[("1", true)],
    );
    let value = serde_json::to_value(Scheduler::generate(&[dana])).unwrap();

    assert_eq!(value["rooms"], json!({ "101": "Dana" }));
    assert_eq!(value["schedule"]["Monday"]["101"], "Available for interns");
    assert_eq!(value["schedule"]["Sunday"]["101"], "Not available");
    assert_eq!(value["office_duty"]["Monday"], "Dana");
    assert_eq!(value["office_duty"]["Sunday"], "No one available");
}

#[test]
fn test_room_availability_follows_anchor_dates() {
    let busy = with_days(senior("Dana", Some("101")), &[("2025-03-02", true)]);
    let result = Scheduler::room_availability(&[busy.clone()]).unwrap();

    assert_eq!(result.rooms["101"], busy.id);
    assert_eq!(result.schedule[&WorkDay::Sunday]["101"], Availability::NotAvailable);
    assert_eq!(result.schedule[&WorkDay::Monday]["101"], Availability::Available);

    let free = with_days(senior("Dana", Some("101")), &[("2025-03-02", false)]);
    let result = Scheduler::room_availability(&[free]).unwrap();
    assert_eq!(result.schedule[&WorkDay::Sunday]["101"], Availability::Available);
}

#[test]
fn test_room_availability_ignores_intern_flags() {
    let dana = with_weeks(
        with_days(senior("Dana", Some("101")), &[("2025-03-06", true)]),
        &[("4", false)],
    );
    let result = Scheduler::room_availability(&[dana]).unwrap();
    assert_eq!(result.schedule[&WorkDay::Thursday]["101"], Availability::NotAvailable);
}

#[test]
fn test_intern_senior_requires_weekly_flag() {
    let dana = with_days(
        senior("Dana", Some("101")),
        &[("2025-03-02", true), ("2025-03-04", true)],
    );

    // no weekly flags: never available
    let result = Scheduler::intern_senior(&[dana.clone()]).unwrap();
    assert!(
        result.schedule[&WorkDay::Sunday]["101"] == Availability::NotAvailable
            && result.schedule[&WorkDay::Tuesday]["101"] == Availability::NotAvailable
    );

    let dana = with_weeks(dana, &[("1", true), ("2", true)]);
    let result = Scheduler::intern_senior(&[dana.clone()]).unwrap();
    assert_eq!(result.rooms["101"], dana.id);
    assert_eq!(result.schedule[&WorkDay::Sunday]["101"], Availability::Available);
    // week 1 but absent on 2025-03-03
    assert_eq!(result.schedule[&WorkDay::Monday]["101"], Availability::NotAvailable);
    assert_eq!(result.schedule[&WorkDay::Tuesday]["101"], Availability::Available);
}

#[test]
fn test_anchored_schedules_on_empty_roster() {
    let result = Scheduler::intern_senior(&[]).unwrap();
    assert!(result.rooms.is_empty());
    assert_eq!(result.schedule.len(), 5);

    let result = Scheduler::room_availability(&[]).unwrap();
    assert!(result.schedule.values().all(|slots| slots.is_empty()));
}

#[test]
fn test_shared_room_keeps_last_senior() {
    let first = senior("Dana", Some("101"));
    let second = senior("Eli", Some("101"));

    let result = Scheduler::room_availability(&[first, second.clone()]).unwrap();
    assert_eq!(result.rooms.len(), 1);
    assert_eq!(result.rooms["101"], second.id);

    let generated = Scheduler::generate(&[senior("Dana", Some("101")), second]);
    assert_eq!(generated.rooms["101"], "Eli");
}
