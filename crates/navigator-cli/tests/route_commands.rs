use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus.csv")
        .canonicalize()
        .expect("fixture matrix present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("navigator-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("LANG", "C")
        .env_remove("LC_ALL")
        .env_remove("NAVIGATOR_DATA")
        .arg("--no-logo")
        .arg("--data")
        .arg(fixture_path());
    cmd
}

#[test]
fn route_prints_optimal_path_in_meters_and_minutes() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Gate", "--to", "Legon Hall"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest Path: Main Gate -> Balme Library -> Legon Hall",
        ))
        .stdout(predicate::str::contains("Distance: 6000.00m"))
        .stdout(predicate::str::contains("Time: 85.71 min(s)"))
        .stdout(predicate::str::contains("ALTERNATE ROUTES"));
}

#[test]
fn route_names_are_case_insensitive() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "main gate", "--to", "GREAT HALL"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Distance: 6500.00m"));
}

#[test]
fn route_limit_caps_alternatives() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Gate",
        "--to",
        "Legon Hall",
        "--limit",
        "2",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ALTERNATE ROUTES (2 of"))
        .stdout(predicate::str::contains(
            "  1. Main Gate -> Balme Library -> Legon Hall,\t6000.00m",
        ))
        .stdout(predicate::str::contains("  3. ").not());
}

#[test]
fn custom_walking_speed_changes_times() {
    let mut cmd = prepare_command();
    cmd.args([
        "--meters-per-minute",
        "60",
        "route",
        "--from",
        "Main Gate",
        "--to",
        "Legon Hall",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Time: 100.00 min(s)"));
}

#[test]
fn json_format_outputs_plan() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format",
        "json",
        "route",
        "--from",
        "Main Gate",
        "--to",
        "Legon Hall",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let plan: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(
        plan["optimal"]["nodes"],
        serde_json::json!(["Main Gate", "Balme Library", "Legon Hall"])
    );
    assert_eq!(plan["optimal"]["distance_meters"], 6000.0);
    assert_eq!(plan["source"], "Main Gate");
}

#[test]
fn unknown_landmark_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Gate", "--to", "Balme Libary"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown landmark: Balme Libary"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn isolated_landmark_is_unreachable() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Gate", "--to", "Botanical Garden"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn same_source_and_destination_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Great Hall", "--to", "great hall"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be the same"));
}

#[test]
fn missing_matrix_reports_path() {
    let temp = tempdir().expect("create temp dir");
    let missing = temp.path().join("absent.csv");
    let mut cmd = cargo_bin_cmd!("navigator-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--no-logo")
        .arg("--data")
        .arg(&missing)
        .args(["route", "--from", "A", "--to", "B"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load landmarks"));
}

#[test]
fn data_path_falls_back_to_environment() {
    let mut cmd = cargo_bin_cmd!("navigator-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("NAVIGATOR_DATA", fixture_path())
        .args(["--no-logo", "places"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Main Gate"));
}

#[test]
fn non_positive_speed_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args([
        "--meters-per-minute",
        "0",
        "route",
        "--from",
        "Main Gate",
        "--to",
        "Legon Hall",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid travel settings"));
}
