//! Shared helpers for behavioral specs

pub use assert_cmd::Command;
pub use predicates::prelude::*;

pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("temp dir")
}

/// Build a wsops command running in its own temp directory so per-run
/// log files land in a scratch location
pub fn wsops(temp: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wsops").expect("binary builds");
    cmd.current_dir(temp.path());
    cmd
}
