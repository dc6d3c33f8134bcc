//! Log-file specs
//!
//! Every run writes `logs/YYYYMMDDHHMMSS-workspace-<action>.log`.

use crate::prelude::*;

#[test]
fn each_run_writes_a_timestamped_log_file() {
    let temp = tempdir();
    wsops(&temp).arg("start").assert().code(3);

    let entries: Vec<_> = std::fs::read_dir(temp.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with("-workspace-start.log"));
    let timestamp = entries[0].split('-').next().unwrap();
    assert_eq!(timestamp.len(), 14);
    assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn log_file_names_carry_the_action() {
    let temp = tempdir();
    wsops(&temp).arg("status").assert().code(3);

    let entries: Vec<_> = std::fs::read_dir(temp.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.iter().any(|n| n.ends_with("-workspace-status.log")));
}
