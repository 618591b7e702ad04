use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use budget_predictor::domain::PredictionRequest;

const BIN_NAME: &str = "budget_predictor_cli";

fn cli_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_PREDICTOR_HOME", home);
    cmd
}

#[test]
fn help_prints_the_command_overview() {
    let home = tempfile::tempdir().unwrap();
    cli_command(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(contains("predict").and(contains("check-goal")));
}

#[test]
fn unknown_commands_fail() {
    let home = tempfile::tempdir().unwrap();
    cli_command(home.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unknown command"));
}

#[test]
fn example_emits_a_parseable_request() {
    let home = tempfile::tempdir().unwrap();
    let output = cli_command(home.path())
        .args(["example", "--months", "6", "--budget", "1000"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let request: PredictionRequest = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(request.prediction_months, 6);
    assert_eq!(request.initial_budget, 1000.0);
    assert!(!request.incomes.is_empty());
    assert!(!request.expenses.is_empty());
}

#[test]
fn predict_show_and_check_goal_round_trip() {
    let home = tempfile::tempdir().unwrap();
    let store = home.path().join("store");
    let request_file = home.path().join("request.json");

    let example = cli_command(home.path())
        .args(["example", "--months", "3", "--budget", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    std::fs::write(&request_file, &example).unwrap();

    let id = "7a4fb1f6-3c1b-4b53-9c63-cf22ad4ad9f8";
    cli_command(home.path())
        .args([
            "predict",
            request_file.to_str().unwrap(),
            "--id",
            id,
            "--store",
            store.to_str().unwrap(),
            "--plain",
        ])
        .assert()
        .success()
        .stdout(contains("Summary").and(contains(id)));

    cli_command(home.path())
        .args(["show", id, "--store", store.to_str().unwrap(), "--plain"])
        .assert()
        .success()
        .stdout(contains("Months"));

    let request: PredictionRequest = serde_json::from_slice(&example).unwrap();
    let start = request.start_prediction_month;
    let month_arg = start.month.to_string();
    let year_arg = start.year.to_string();
    cli_command(home.path())
        .args([
            "check-goal",
            id,
            "--month",
            month_arg.as_str(),
            "--year",
            year_arg.as_str(),
            "--income-at-least",
            "1",
            "--store",
            store.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("true"));
}

#[test]
fn check_goal_on_an_unknown_id_prints_false() {
    let home = tempfile::tempdir().unwrap();
    let store = home.path().join("store");
    cli_command(home.path())
        .args([
            "check-goal",
            "31a2cf9e-8d10-4b8e-8f8e-2f0c4e1b5ad4",
            "--month",
            "1",
            "--year",
            "2025",
            "--store",
            store.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("false"));
}
