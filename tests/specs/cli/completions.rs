//! Completions specs

use crate::prelude::*;

#[test]
fn bash_completions_mention_the_binary() {
    let temp = tempdir();
    wsops(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wsops"));
}

#[test]
fn completions_do_not_create_a_log_file() {
    let temp = tempdir();
    wsops(&temp).args(["completions", "zsh"]).assert().success();
    assert!(!temp.path().join("logs").exists());
}
