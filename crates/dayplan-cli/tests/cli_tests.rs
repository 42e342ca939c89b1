use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color and the given database
fn dp_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dp").expect("Failed to find dp binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

/// Breakfast at 07:00, Reading and Sleep at 23:00
fn seed_plan(db_path: &Path) {
    dp_cmd(db_path)
        .args(["add", "Breakfast", "--length", "30", "--start", "07:00", "--fixed"])
        .assert()
        .success();
    dp_cmd(db_path)
        .args(["add", "Sleep", "--length", "0", "--start", "23:00", "--fixed"])
        .assert()
        .success();
    dp_cmd(db_path)
        .args(["add", "Reading", "--length", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Reading' at row 1"));
}

#[test]
fn test_cli_show_empty_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dp_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities planned."));
}

#[test]
fn test_cli_add_shows_recalculated_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    // 960 minutes until 23:00 for 90 planned: Breakfast stretches too.
    dp_cmd(&db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Breakfast | 30 | 320 |"))
        .stdout(predicate::str::contains("| 12:20 | Reading | 60 | 640 |"))
        .stdout(predicate::str::contains("| ▶ 0 |"));
}

#[test]
fn test_cli_rigid_activity_keeps_its_length() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    // 07:30 to 23:00 is 930 minutes for Reading alone.
    dp_cmd(&db_path)
        .args(["set", "0", "rigid", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Breakfast | 30 | 30 |"))
        .stdout(predicate::str::contains("| 07:30 | Reading | 60 | 930 |"));
}

#[test]
fn test_cli_add_fixed_without_start_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dp_cmd(&db_path)
        .args(["add", "Meeting", "--length", "60", "--fixed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_time"));
}

#[test]
fn test_cli_add_rejects_malformed_time() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dp_cmd(&db_path)
        .args(["add", "Meeting", "--length", "60", "--start", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HH:MM"));
}

#[test]
fn test_cli_set_and_move() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .args(["set", "1", "name", "Writing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Updated name of row 1"))
        .stdout(predicate::str::contains("Writing"));

    dp_cmd(&db_path)
        .args(["set", "1", "actlen", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Nothing changed"));

    dp_cmd(&db_path)
        .args(["move", "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved row 1 to row 0"));
}

#[test]
fn test_cli_set_unknown_field_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .args(["set", "1", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown activity field"));
}

#[test]
fn test_cli_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .args(["delete", "1", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 of 2 activities"))
        .stdout(predicate::str::contains("Reading").not());
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));
    dp_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"));

    dp_cmd(&db_path)
        .args(["clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared the plan"));
    dp_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities planned."));
}

#[test]
fn test_cli_export_then_import() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let file = temp_dir.path().join("plan.json");
    let file_arg = file.to_str().unwrap();
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .args(["export", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 activities"));

    // Every id is known, so the default mode skips them all.
    dp_cmd(&db_path)
        .args(["import", file_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 added, 0 replaced, 3 skipped"));

    let other_db = temp_dir.path().join("other.db");
    dp_cmd(&other_db)
        .args(["import", file_arg, "--mode", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 added"))
        .stdout(predicate::str::contains("Breakfast"))
        .stdout(predicate::str::contains("Sleep"));
}

#[test]
fn test_cli_import_missing_file_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let missing = temp_dir.path().join("missing.json");

    dp_cmd(&db_path)
        .args(["import", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import"));
}

#[test]
fn test_cli_empty_log() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dp_cmd(&db_path)
        .args(["log", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Log for 2024-03-01"))
        .stdout(predicate::str::contains("No archived activities found."));
}

#[test]
fn test_cli_run_session() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_plan(&db_path);

    dp_cmd(&db_path)
        .arg("run")
        .write_stdin("start\nend\nsnooze\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Started: Breakfast"))
        .stdout(predicate::str::contains("Stopped: Breakfast"))
        .stdout(predicate::str::contains("unrecognized subcommand"));

    // Breakfast is history now.
    dp_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("| ▶ 1 |"));
}

#[test]
fn test_cli_run_reports_handler_errors() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dp_cmd(&db_path)
        .arg("run")
        .write_stdin("start\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));
}
