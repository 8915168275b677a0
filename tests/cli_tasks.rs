mod support;

use predicates::str::contains;

use support::{task_cmd, TaskDir};

#[test]
fn end_to_end_add_ls_done_report() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .args(["add", "2", "write spec"])
        .assert()
        .success()
        .stdout("Added task: \"write spec\" with priority 2\n");
    task_cmd(&dir)
        .args(["add", "1", "review spec"])
        .assert()
        .success()
        .stdout("Added task: \"review spec\" with priority 1\n");

    task_cmd(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout("1. review spec [1]\n2. write spec [2]\n");

    task_cmd(&dir)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout("Marked item as done.\n");

    task_cmd(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout("Pending: 1\n1. write spec [2]\n\nCompleted: 1\n1. review spec\n");
}

#[test]
fn ls_on_empty_store_creates_file_and_reports_no_tasks() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout("There are no pending tasks!\n");
    assert_eq!(dir.read_db(), "Name,Priority,Done\n");
}

#[test]
fn duplicate_add_reports_success_but_leaves_file_unchanged() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .args(["add", "3", "errands"])
        .assert()
        .success();
    let before = dir.read_db();

    task_cmd(&dir)
        .args(["add", "3", "errands"])
        .assert()
        .success()
        .stdout("Added task: \"errands\" with priority 3\n");
    assert_eq!(dir.read_db(), before);
}

#[test]
fn readding_a_name_replaces_the_prior_entry() {
    let dir = TaskDir::new();

    task_cmd(&dir).args(["add", "3", "errands"]).assert().success();
    task_cmd(&dir).args(["done", "1"]).assert().success();
    task_cmd(&dir).args(["add", "1", "errands"]).assert().success();

    task_cmd(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout("Pending: 1\n1. errands [1]\n\nCompleted: 0\n");
}

#[test]
fn done_out_of_range_prints_error_and_changes_nothing() {
    let dir = TaskDir::new();
    task_cmd(&dir).args(["add", "1", "only"]).assert().success();
    let before = dir.read_db();

    for index in ["99", "0", "-2"] {
        task_cmd(&dir)
            .args(["done", index])
            .assert()
            .success()
            .stdout(format!(
                "Error: no incomplete item with index #{index} exists.\n"
            ));
    }
    assert_eq!(dir.read_db(), before);
}

#[test]
fn del_removes_pending_only() {
    let dir = TaskDir::new();
    task_cmd(&dir).args(["add", "1", "keep"]).assert().success();
    task_cmd(&dir).args(["done", "1"]).assert().success();
    task_cmd(&dir).args(["add", "2", "drop"]).assert().success();

    task_cmd(&dir)
        .args(["del", "1"])
        .assert()
        .success()
        .stdout("Deleted task #1\n");

    assert_eq!(dir.read_db(), "Name,Priority,Done\nkeep,1,1\n");

    task_cmd(&dir)
        .args(["del", "1"])
        .assert()
        .success()
        .stdout("Error: task with index #1 does not exist. Nothing deleted.\n");
}

#[test]
fn missing_arguments_print_errors_without_file_access() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .args(["add", "2"])
        .assert()
        .success()
        .stdout("Error: Missing tasks string. Nothing added!\n");
    task_cmd(&dir)
        .arg("done")
        .assert()
        .success()
        .stdout("Error: Missing NUMBER for marking tasks as done.\n");
    task_cmd(&dir)
        .args(["del", "1", "2"])
        .assert()
        .success()
        .stdout("Error: Missing NUMBER for deleting tasks.\n");

    assert!(!dir.data_file().exists());
}

#[test]
fn negative_priority_is_accepted() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .args(["add", "-1", "urgent"])
        .assert()
        .success()
        .stdout("Added task: \"urgent\" with priority -1\n");
    task_cmd(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout("1. urgent [-1]\n");
}

#[test]
fn clear_deletes_the_file_and_reports_when_absent() {
    let dir = TaskDir::new();
    task_cmd(&dir).args(["add", "1", "gone soon"]).assert().success();

    task_cmd(&dir).arg("clear").assert().success().stdout("");
    assert!(!dir.data_file().exists());

    task_cmd(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout("Error: Database file does not exist\n");

    task_cmd(&dir)
        .args(["clear", "now"])
        .assert()
        .success()
        .stdout("Error: Invalid syntax for clearing database file. Nothing cleared!\n");
}

#[test]
fn quoted_names_with_commas_survive_a_round_trip() {
    let dir = TaskDir::new();

    task_cmd(&dir)
        .args(["add", "1", "pack bags, passports"])
        .assert()
        .success();
    task_cmd(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout("1. pack bags, passports [1]\n");
    assert_eq!(
        dir.read_db(),
        "Name,Priority,Done\n\"pack bags, passports\",1,0\n"
    );
}

#[test]
fn malformed_row_aborts_the_command() {
    let dir = TaskDir::new();
    dir.write_db("Name,Priority,Done\nok,1,0\nbad,high,0\n");

    task_cmd(&dir)
        .arg("ls")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Malformed task file"));
}
