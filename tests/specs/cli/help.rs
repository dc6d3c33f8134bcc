//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_every_action() {
    let temp = tempdir();
    wsops(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn help_documents_the_tuning_flags() {
    let temp = tempdir();
    wsops(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--include-tags"))
        .stdout(predicate::str::contains("--max-tag-lookups"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag_prints_and_exits_cleanly() {
    let temp = tempdir();
    wsops(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wsops"));
}
