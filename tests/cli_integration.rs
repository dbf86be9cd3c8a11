use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tasktrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasktrack").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn end_to_end_add_mark_list_delete() {
    let dir = TempDir::new().unwrap();

    tasktrack(&dir)
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added: Buy milk"))
        .stdout(predicate::str::contains("todo"));

    let store_path = dir.path().join("tasks.json");
    assert!(store_path.exists());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store_path).unwrap()).unwrap();
    assert_eq!(value["1"]["description"], "Buy milk");
    assert_eq!(value["1"]["status"], "todo");

    tasktrack(&dir)
        .args(["mark-done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task with ID 1 marked as done."));

    tasktrack(&dir)
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("done"));

    tasktrack(&dir)
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks to display."));

    tasktrack(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task with ID 1 deleted."));

    tasktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks to display."));
}

#[test]
fn update_changes_the_listed_description() {
    let dir = TempDir::new().unwrap();

    tasktrack(&dir).args(["add", "Buy milk"]).assert().success();
    tasktrack(&dir)
        .args(["update", "1", "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task updated: Buy oat milk"));

    tasktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy oat milk"))
        .stdout(predicate::str::contains("Buy milk\n").not());
}

#[test]
fn missing_command_fails_with_usage() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).arg("frobnicate").assert().failure();
}

#[test]
fn wrong_argument_count_fails() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).arg("add").assert().failure();
    tasktrack(&dir).args(["update", "1"]).assert().failure();
    tasktrack(&dir)
        .args(["delete", "1", "2"])
        .assert()
        .failure();
}

#[test]
fn invalid_list_filter_fails() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).args(["add", "A"]).assert().success();

    tasktrack(&dir)
        .args(["list", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status filter"));
}

#[test]
fn operations_on_missing_ids_leave_the_store_untouched() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).args(["add", "A"]).assert().success();

    let store_path = dir.path().join("tasks.json");
    let before = fs::read(&store_path).unwrap();

    for args in [
        vec!["update", "99", "New"],
        vec!["delete", "99"],
        vec!["mark-in-progress", "99"],
        vec!["mark-done", "99"],
    ] {
        tasktrack(&dir)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Task with ID 99 not found"));
    }

    assert_eq!(fs::read(&store_path).unwrap(), before);
}

#[test]
fn clear_tasks_force_empties_the_store() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).args(["add", "A"]).assert().success();
    tasktrack(&dir).args(["add", "B"]).assert().success();

    tasktrack(&dir)
        .args(["clear-tasks", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks cleared."));

    tasktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks to display."));
}

#[test]
fn clear_tasks_declined_keeps_tasks_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).args(["add", "A"]).assert().success();

    tasktrack(&dir)
        .arg("clear-tasks")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear operation cancelled."));

    tasktrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"));
}

#[test]
fn clear_tasks_confirmed_via_stdin() {
    let dir = TempDir::new().unwrap();
    tasktrack(&dir).args(["add", "A"]).assert().success();

    tasktrack(&dir)
        .arg("clear-tasks")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks cleared."));
}

#[test]
fn file_flag_points_at_a_custom_store() {
    let dir = TempDir::new().unwrap();

    tasktrack(&dir)
        .args(["--file", "custom.json", "add", "Elsewhere"])
        .assert()
        .success();

    assert!(dir.path().join("custom.json").exists());
    assert!(!dir.path().join("tasks.json").exists());

    tasktrack(&dir)
        .args(["--file", "custom.json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));
}

#[test]
fn corrupt_store_reports_a_clear_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tasks.json"), "{ not json").unwrap();

    tasktrack(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt task store at"));
}
