#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn taskz_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskz").unwrap();
    cmd.env("TASKZ_HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_add_and_list() {
    let home = TempDir::new().unwrap();

    taskz_cmd(&home)
        .write_stdin("todo read book\ndeadline return book /by 2019-06-06\nhighpriority 1\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T][ ] IMPT! read book"))
        .stdout(predicate::str::contains("2. [D][ ] return book (by: 6 Jun)"));
}

#[test]
fn test_saved_tasks_load_on_next_start() {
    let home = TempDir::new().unwrap();

    taskz_cmd(&home)
        .write_stdin("todo a\nevent b /at 2020-02-29\ndone 2\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 task(s)"));

    let saved = fs::read_to_string(home.path().join("tasks.txt")).unwrap();
    assert_eq!(saved, "T;0;0;a\nE;1;0;b;2020-02-29\n");
    assert!(home.path().join("config.json").exists());

    taskz_cmd(&home)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [E][X] b (at: 29 Feb)"));
}

#[test]
fn test_corrupt_file_is_rejected_whole() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("tasks.txt"), "T;0;0;fine\nD;0;1;no date\n").unwrap();

    taskz_cmd(&home)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("Your task list is empty."))
        .stdout(predicate::str::contains("fine").not());
}

#[test]
fn test_bye_waits_for_y_or_n() {
    let home = TempDir::new().unwrap();

    taskz_cmd(&home)
        .write_stdin("bye\nmaybe\nn\ntodo after cancel\nbye\ny\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please key in either \"y\" or \"n\""))
        .stdout(predicate::str::contains("after cancel"))
        .stdout(predicate::str::contains("Bye."))
        .stdout(predicate::str::contains("1. [T]").not());
}

#[test]
fn test_errors_are_reported_not_fatal() {
    let home = TempDir::new().unwrap();

    taskz_cmd(&home)
        .write_stdin("fly away\ndelete 3 3\ndelete 3 3a\ntodo ok\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("don't know what \"fly\" means"))
        .stdout(predicate::str::contains("more than once"))
        .stdout(predicate::str::contains("\"3a\" is not a valid number!"))
        .stdout(predicate::str::contains("1. [T][ ] ok"));
}

#[test]
fn test_one_shot_commands() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("custom").join("mine.txt");

    taskz_cmd(&home)
        .arg("--data-file")
        .arg(&data_file)
        .args(["-c", "todo from flag", "-c", "save"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&data_file).unwrap(), "T;0;0;from flag\n");
}

#[test]
fn test_help_for_single_command() {
    let home = TempDir::new().unwrap();

    taskz_cmd(&home)
        .args(["-c", "deadline -h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deadline <description> /by <YYYY-MM-DD>"));
}
