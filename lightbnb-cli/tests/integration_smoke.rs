//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn lightbnb() -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    // Nothing listens on port 1; connection attempts fail fast.
    cmd.env("DATABASE_URL", "postgres://nobody@127.0.0.1:1/lightbnb")
        .env("LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS", "2")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help_lists_commands() {
    lightbnb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reservations"))
        .stdout(predicate::str::contains("properties"));
}

#[test]
fn test_user_help() {
    lightbnb()
        .args(["user", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find a user by exact email"));
}

#[test]
fn test_properties_help() {
    lightbnb()
        .args(["properties", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whole currency units"));
}

#[test]
fn test_property_add_help() {
    lightbnb()
        .args(["property", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price per night in cents"));
}

// === Argument Errors ===

#[test]
fn test_rejects_non_numeric_guest() {
    lightbnb()
        .args(["reservations", "someone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_rejects_negative_price() {
    lightbnb()
        .args(["properties", "--min-price", "-5"])
        .assert()
        .failure();
}

// === Store Failures ===

#[test]
fn test_unreachable_database_fails() {
    lightbnb()
        .args(["user", "id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_bad_config_fails_before_connecting() {
    lightbnb()
        .env_remove("DATABASE_URL")
        .env("LIGHTBNB_DB_PORT", "not-a-port")
        .args(["user", "id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid database configuration"));
}
