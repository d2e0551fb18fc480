use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("quizlink").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ScoreApp webhook ingest"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("quizlink").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_init_db_without_database_url_fails() {
    let mut cmd = Command::cargo_bin("quizlink").unwrap();
    cmd.arg("init-db")
        .env_remove("DATABASE_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to initialize database table"));
}
