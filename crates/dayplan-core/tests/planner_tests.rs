mod common;

use common::{create_test_planner, full_day, open_planner, DAY};
use dayplan_core::{Activity, ImportMode, PlanEvent, PlanHandler, PlannerError, PlanStore};
use jiff::civil::time;

#[test]
fn test_plan_and_frontier_survive_reopen() {
    let (temp_dir, mut list, clock) = create_test_planner(time(7, 0, 0, 0));
    list.insert_many(0, full_day()).unwrap();

    clock.set_time(time(7, 31, 0, 0));
    list.complete_activity(false).unwrap();
    let before = list.activities().to_vec();
    drop(list);

    let reopened = open_planner(&temp_dir.path().join("test.db"), &clock);

    assert_eq!(reopened.current_index(), 1);
    assert_eq!(reopened.activities(), before.as_slice());
    assert_eq!(reopened.activities()[0].actual_length, 31);
}

#[test]
fn test_out_of_range_frontier_is_reset_on_load() {
    let (temp_dir, mut list, clock) = create_test_planner(time(7, 0, 0, 0));
    list.insert_many(0, full_day()).unwrap();
    drop(list);

    let db_path = temp_dir.path().join("test.db");
    {
        let mut db = dayplan_core::Database::new(&db_path).unwrap();
        db.save_current_index(40).unwrap();
    }

    let reopened = open_planner(&db_path, &clock);
    assert_eq!(reopened.current_index(), 0);
    assert_eq!(reopened.activities()[1].actual_length, 84);
}

#[test]
fn test_whole_day_runs_to_archive() {
    let (_temp_dir, mut list, clock) = create_test_planner(time(7, 0, 0, 0));
    list.insert_many(0, full_day()).unwrap();
    let (mut handler, mut events) = PlanHandler::new(list);

    // Spend 30 minutes on every activity until the plan runs out.
    for _ in 0..16 {
        handler.start(false).unwrap();
        clock.advance_minutes(30);
        handler.tick();
        handler.end(false).unwrap();
    }

    assert_eq!(handler.list().current_index(), 0);
    let log = handler.list().store().read_log(DAY).unwrap();
    assert_eq!(log.len(), 16);
    assert!(log.iter().all(|entry| entry.actual_length == 30));
    assert_eq!(log[15].start_time, time(14, 30, 0, 0));

    let mut completed = 0;
    while let Ok(event) = events.try_recv() {
        if event == PlanEvent::PlanCompleted {
            completed += 1;
        }
    }
    assert_eq!(completed, 1);
}

#[test]
fn test_history_is_kept_while_rest_of_day_adapts() {
    let (_temp_dir, mut list, clock) = create_test_planner(time(7, 0, 0, 0));
    list.insert_many(0, full_day()).unwrap();

    // Breakfast ran 31 minutes, reading 75.
    clock.set_time(time(7, 31, 0, 0));
    list.complete_activity(false).unwrap();
    clock.set_time(time(8, 46, 0, 0));
    list.complete_activity(false).unwrap();

    let plan = list.activities();
    assert_eq!(plan[0].actual_length, 31);
    assert_eq!(plan[1].actual_length, 75);
    assert_eq!(plan[1].start_time, time(7, 31, 0, 0));
    assert_eq!(plan[2].start_time, time(8, 46, 0, 0));
    // The afternoon block is unaffected by the morning.
    assert_eq!(plan[9].start_time, time(16, 0, 0, 0));
    assert_eq!(plan[10].actual_length, 43);
}

#[test]
fn test_export_import_round_trip_between_plans() {
    let (temp_dir, mut source, _clock) = create_test_planner(time(7, 0, 0, 0));
    source.insert_many(0, full_day()).unwrap();
    let path = temp_dir.path().join("day.json");
    source.export_activities(&path, &[]).unwrap();

    let (_other_dir, mut target, _other_clock) = create_test_planner(time(7, 0, 0, 0));
    let summary = target.import_activities(&path, ImportMode::Add).unwrap();

    assert_eq!(summary.added, 17);
    for (copy, original) in target.activities().iter().zip(source.activities()) {
        assert_eq!(copy.name, original.name);
        assert_eq!(copy.length, original.length);
        assert_eq!(copy.is_fixed, original.is_fixed);
        assert_eq!(copy.is_rigid, original.is_rigid);
        if original.is_fixed {
            assert_eq!(copy.start_time, original.start_time);
        }
        // Derived fields are recomputed, and agree.
        assert_eq!(copy.actual_length, original.actual_length);
        assert_eq!(copy.optimal_length, original.optimal_length);
    }
}

#[test]
fn test_export_import_keeps_fixed_times_given_with_seconds() {
    let (temp_dir, mut source, _clock) = create_test_planner(time(9, 0, 0, 0));
    source
        .insert_many(
            0,
            vec![
                Activity::new("Write", 7).fixed_at(time(9, 0, 0, 0)),
                Activity::new("End", 0).fixed_at(time(10, 1, 59, 0)),
            ],
        )
        .unwrap();
    let path = temp_dir.path().join("day.json");
    source.export_activities(&path, &[]).unwrap();

    let (_other_dir, mut target, _other_clock) = create_test_planner(time(9, 0, 0, 0));
    target.import_activities(&path, ImportMode::Add).unwrap();

    assert_eq!(target.activities()[1].start_time, time(10, 1, 0, 0));
    assert_eq!(
        target.activities()[1].start_time,
        source.activities()[1].start_time
    );
    assert_eq!(target.activities()[0].actual_length, 61);
    assert_eq!(source.activities()[0].actual_length, 61);
}

#[test]
fn test_importing_legacy_file_without_ids() {
    let (temp_dir, mut list, _clock) = create_test_planner(time(7, 0, 0, 0));
    let path = temp_dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"[{"name": "Breakfast", "length": 30, "start_time": "07:00", "is_fixed": true, "is_rigid": false},
            {"name": "Walk", "length": 30, "start_time": "00:00", "is_fixed": false, "is_rigid": false},
            {"name": "Work", "length": 0, "start_time": "09:00", "is_fixed": true, "is_rigid": false}]"#,
    )
    .unwrap();

    list.import_activities(&path, ImportMode::Ignore).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.activities()[1].actual_length, 60);
    assert!(list.activities().iter().all(|a| a.id.0 > 0));
}

#[test]
fn test_interrupt_when_nothing_follows_reports_error() {
    let (_temp_dir, mut list, _clock) = create_test_planner(time(22, 0, 0, 0));
    list.insert(0, Activity::new("Sleep", 0).fixed_at(time(23, 0, 0, 0)))
        .unwrap();
    let (mut handler, _events) = PlanHandler::new(list);

    let err = handler.interrupt("Noise").unwrap_err();
    assert!(matches!(err, PlannerError::NoFollowingActivity { .. }));
}

#[test]
fn test_builder_rejects_directory_as_database() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let result = dayplan_core::PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path()))
        .build();

    assert!(matches!(result, Err(PlannerError::Configuration { .. })));
}

#[test]
fn test_builder_creates_missing_parent_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("plans").join("day.db");

    let list = dayplan_core::PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();

    assert!(list.is_empty());
    assert!(db_path.exists());
}
