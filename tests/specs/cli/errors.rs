//! Input-error specs
//!
//! Invalid input exits 3 before any remote call is attempted.

use crate::prelude::*;

#[test]
fn no_targets_exits_three() {
    let temp = tempdir();
    wsops(&temp).arg("start").assert().code(3);
}

#[test]
fn missing_targets_file_exits_three() {
    let temp = tempdir();
    wsops(&temp)
        .args(["resolve", "--file", "absent.txt"])
        .assert()
        .code(3);
}

#[test]
fn comment_only_targets_file_exits_three() {
    let temp = tempdir();
    std::fs::write(temp.path().join("targets.txt"), "# nothing here\n\n").unwrap();
    wsops(&temp)
        .args(["resolve", "--file", "targets.txt"])
        .assert()
        .code(3);
}

#[test]
fn blank_names_list_exits_three() {
    let temp = tempdir();
    wsops(&temp)
        .args(["stop", "--names", " , ,"])
        .assert()
        .code(3);
}

#[test]
fn unknown_action_is_a_usage_error() {
    let temp = tempdir();
    wsops(&temp)
        .arg("explode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
