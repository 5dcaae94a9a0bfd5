use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("instsync").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync institution registries"));
}

#[test]
fn test_cli_rejects_unknown_flags() {
    let mut cmd = Command::cargo_bin("instsync").unwrap();
    cmd.arg("--dry-run").assert().failure();
}

#[test]
fn test_cli_missing_database_url_fails() {
    let mut cmd = Command::cargo_bin("instsync").unwrap();
    cmd.env_remove("DATABASE_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL environment variable is required"))
        .stdout(predicate::str::contains("Sync completed").not());
}

#[test]
fn test_cli_unreachable_database_fails() {
    let mut cmd = Command::cargo_bin("instsync").unwrap();
    cmd.env("DATABASE_URL", "postgres://nobody@127.0.0.1:1/none")
        .env("INSTSYNC_PG_ACQUIRE_TIMEOUT_SECS", "1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Processing 3 institutions..."))
        .stderr(predicate::str::contains("failed to open database"));
}
