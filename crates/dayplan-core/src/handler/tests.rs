//! Tests for the plan handler.

use jiff::civil::{date, time, Date, Time};
use tokio::sync::mpsc::UnboundedReceiver;

use super::*;
use crate::{clock::ManualClock, models::Activity};

const DAY: Date = date(2024, 3, 1);

fn create_test_handler(
    now: Time,
    plan: Vec<Activity>,
) -> (PlanHandler, UnboundedReceiver<PlanEvent>, ManualClock) {
    let clock = ManualClock::new(DAY.to_datetime(now));
    let db = Database::open_in_memory().expect("Failed to open database");
    let mut list = ActivityList::load(db, Box::new(clock.clone())).expect("Failed to load plan");
    list.insert_many(0, plan).expect("Failed to insert plan");

    let (handler, rx) = PlanHandler::new(list);
    (handler, rx, clock)
}

fn drain(rx: &mut UnboundedReceiver<PlanEvent>) -> Vec<PlanEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn morning() -> Vec<Activity> {
    vec![
        Activity::new("Deep work", 60).fixed_at(time(10, 0, 0, 0)),
        Activity::new("Lunch", 30).fixed_at(time(11, 0, 0, 0)),
        Activity::new("End", 0).fixed_at(time(12, 0, 0, 0)),
    ]
}

#[test]
fn test_start_stamps_current_activity_and_counts_down_to_following() {
    let (mut handler, mut rx, _clock) = create_test_handler(time(10, 5, 30, 0), morning());

    handler.start(false).unwrap();

    assert_eq!(
        handler.state(),
        HandlerState::Running {
            countdown_to: time(11, 0, 0, 0)
        }
    );
    assert_eq!(handler.list().activities()[0].start_time, time(10, 5, 0, 0));
    assert_eq!(handler.seconds_remaining(), 3270);

    let events = drain(&mut rx);
    assert_eq!(events[0], PlanEvent::ActivityListChanged);
    assert!(matches!(&events[1], PlanEvent::ActivityStarted(a) if a.name == "Deep work"));
}

#[test]
fn test_preemptive_start_keeps_scheduled_start_time() {
    let (mut handler, mut rx, _clock) = create_test_handler(time(9, 40, 0, 0), morning());

    handler.start(true).unwrap();

    assert_eq!(handler.list().activities()[0].start_time, time(10, 0, 0, 0));
    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], PlanEvent::ActivityStarted(_)));
}

#[test]
fn test_tick_reports_countdown_before_expiry() {
    let (mut handler, mut rx, clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(false).unwrap();
    drain(&mut rx);

    clock.set_time(time(10, 59, 58, 0));
    handler.tick();
    assert_eq!(
        drain(&mut rx),
        vec![PlanEvent::Countdown {
            seconds_remaining: 2
        }]
    );

    clock.set_time(time(11, 0, 0, 0));
    handler.tick();
    let events = drain(&mut rx);
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        PlanEvent::Countdown {
            seconds_remaining: 0
        }
    );
    assert!(matches!(&events[1], PlanEvent::ActivityExpired(a) if a.name == "Deep work"));

    // Expiry does not end the activity.
    assert!(handler.is_running());
    assert_eq!(handler.list().current_index(), 0);
}

#[test]
fn test_overrun_counts_negative_without_expiring_again() {
    let (mut handler, mut rx, clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(false).unwrap();
    drain(&mut rx);

    clock.set_time(time(11, 0, 5, 0));
    handler.tick();

    assert_eq!(
        drain(&mut rx),
        vec![PlanEvent::Countdown {
            seconds_remaining: -5
        }]
    );
}

#[test]
fn test_idle_handler_is_quiet() {
    let (mut handler, mut rx, _clock) = create_test_handler(time(10, 0, 0, 0), morning());

    assert_eq!(handler.state(), HandlerState::Idle);
    assert_eq!(handler.seconds_remaining(), 0);

    handler.tick();
    handler.abort();
    handler.end(false).unwrap();

    assert!(drain(&mut rx).is_empty());
    assert_eq!(handler.list().current_index(), 0);
}

#[test]
fn test_abort_records_nothing() {
    let (mut handler, mut rx, clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(false).unwrap();
    let before = handler.list().activities().to_vec();
    drain(&mut rx);

    clock.advance_minutes(25);
    handler.abort();

    assert_eq!(handler.state(), HandlerState::Idle);
    assert_eq!(handler.list().current_index(), 0);
    assert_eq!(handler.list().activities(), before.as_slice());
    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], PlanEvent::ActivityStopped(_)));
}

#[test]
fn test_start_while_running_aborts_first() {
    let (mut handler, mut rx, _clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(true).unwrap();
    handler.start(true).unwrap();

    let events = drain(&mut rx);
    assert!(matches!(events[0], PlanEvent::ActivityStarted(_)));
    assert!(matches!(events[1], PlanEvent::ActivityStopped(_)));
    assert!(matches!(events[2], PlanEvent::ActivityStarted(_)));
}

#[test]
fn test_interruption_splits_current_activity() {
    let (mut handler, _rx, clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(false).unwrap();

    clock.set_time(time(10, 20, 0, 0));
    handler.interrupt("Phone call").unwrap();

    let list = handler.list();
    let names: Vec<&str> = list.activities().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Deep work", "Phone call", "Deep work", "Lunch", "End"]);

    assert!(list.activities()[1].is_rigid);
    assert_eq!(list.activities()[1].length, 20);
    assert_eq!(list.activities()[2].length, 40);

    assert_eq!(list.activities()[0].actual_length, 20);
    assert_eq!(list.current_index(), 1);
    assert_eq!(list.activities()[1].start_time, time(10, 20, 0, 0));
    assert_eq!(handler.state(), HandlerState::Idle);
}

#[test]
fn test_replacement_fills_time_until_following_activity() {
    let (mut handler, _rx, clock) = create_test_handler(time(10, 0, 0, 0), morning());
    handler.start(false).unwrap();

    clock.set_time(time(10, 15, 0, 0));
    handler.replace("Fire drill").unwrap();

    let list = handler.list();
    assert_eq!(list.len(), 4);
    assert_eq!(list.activities()[1].name, "Fire drill");
    assert_eq!(list.activities()[1].length, 45);
    assert!(!list.activities()[1].is_rigid);
    assert_eq!(list.activities()[0].actual_length, 15);
    assert_eq!(list.current_index(), 1);
}

#[test]
fn test_preemptive_end_starts_next_activity() {
    let (mut handler, mut rx, _clock) = create_test_handler(time(9, 0, 0, 0), morning());
    handler.start(true).unwrap();
    drain(&mut rx);

    handler.end(true).unwrap();

    assert_eq!(handler.list().current_index(), 1);
    assert_eq!(
        handler.state(),
        HandlerState::Running {
            countdown_to: time(12, 0, 0, 0)
        }
    );
    // Nothing was performed, so nothing was recorded.
    assert_eq!(handler.list().activities()[0].actual_length, 60);

    let events = drain(&mut rx);
    assert!(matches!(events[0], PlanEvent::ActivityStopped(_)));
    assert!(matches!(events.last(), Some(PlanEvent::ActivityStarted(a)) if a.name == "Lunch"));
}

#[test]
fn test_ending_last_activity_archives_the_day() {
    let plan = vec![
        Activity::new("Walk", 30).fixed_at(time(9, 0, 0, 0)),
        Activity::new("Done", 0).fixed_at(time(9, 30, 0, 0)),
    ];
    let (mut handler, mut rx, clock) = create_test_handler(time(9, 0, 0, 0), plan);
    handler.start(false).unwrap();
    clock.advance_minutes(35);

    handler.end(false).unwrap();

    assert_eq!(handler.state(), HandlerState::Idle);
    assert_eq!(handler.list().current_index(), 0);

    let log = handler.list().store().read_log(DAY).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].name, "Walk");
    assert_eq!(log[0].actual_length, 35);

    let events = drain(&mut rx);
    assert_eq!(events.last(), Some(&PlanEvent::PlanCompleted));
}

#[test]
fn test_start_without_following_activity_fails() {
    let plan = vec![Activity::new("Sleep", 0).fixed_at(time(23, 0, 0, 0))];
    let (mut handler, _rx, _clock) = create_test_handler(time(22, 0, 0, 0), plan);

    let err = handler.start(false).unwrap_err();
    assert!(matches!(err, PlannerError::NoFollowingActivity { index: 0 }));
    assert_eq!(handler.state(), HandlerState::Idle);
}

#[test]
fn test_start_from_index_moves_frontier() {
    let (mut handler, _rx, _clock) = create_test_handler(time(11, 10, 0, 0), morning());

    handler.start_from_index(1, false).unwrap();

    assert_eq!(handler.list().current_index(), 1);
    assert_eq!(handler.list().activities()[1].start_time, time(11, 10, 0, 0));
    assert_eq!(
        handler.state(),
        HandlerState::Running {
            countdown_to: time(12, 0, 0, 0)
        }
    );
}

#[test]
fn test_archive_only_once_plan_is_completed() {
    let plan = vec![
        Activity::new("Walk", 30).fixed_at(time(9, 0, 0, 0)),
        Activity::new("Done", 0).fixed_at(time(9, 30, 0, 0)),
    ];
    let (mut handler, mut rx, clock) = create_test_handler(time(9, 0, 0, 0), plan);

    handler.archive().unwrap();
    assert!(handler.list().store().read_log(DAY).unwrap().is_empty());

    handler.start(false).unwrap();
    clock.advance_minutes(30);
    handler.end(false).unwrap();
    drain(&mut rx);

    // The frontier is back at the start, so there is nothing left to archive.
    handler.archive().unwrap();
    assert_eq!(handler.list().store().read_log(DAY).unwrap().len(), 1);
    assert!(drain(&mut rx).is_empty());
}
