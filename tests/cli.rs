// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SCENARIO_A: &str = r#"
causes_severe_harm = false
causes_minor_harm = false
prevents_catastrophe = false
violates_privacy = false
has_consent = false
involves_deception = false
has_ethics_approval = false
has_explanation = true
uses_historical_data = false
has_bias_mitigation = false
"#;

const SCENARIO_B_JSON: &str = r#"{
  "causes_severe_harm": true,
  "causes_minor_harm": true,
  "prevents_catastrophe": false,
  "violates_privacy": true,
  "has_consent": false,
  "deceives_human": true,
  "has_ethics_approval": false,
  "has_explanation": false,
  "uses_historical_data": true,
  "has_bias_mitigation": false
}"#;

/// Run egf in an isolated directory so no stray egf.toml is picked up.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("egf").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn evaluate_permissible_toml_file() {
    let dir = workspace();
    std::fs::write(dir.path().join("a.toml"), SCENARIO_A).unwrap();

    cmd(&dir)
        .args(["evaluate", "a.toml"])
        .assert()
        .success()
        .stdout(contains("PERMISSIBLE"))
        .stdout(contains("IMPERMISSIBLE").not());
}

#[test]
fn evaluate_json_file_reports_every_violation() {
    let dir = workspace();
    std::fs::write(dir.path().join("b.json"), SCENARIO_B_JSON).unwrap();

    cmd(&dir)
        .args(["evaluate", "b.json"])
        .assert()
        .success()
        .stdout(contains(
            "IMPERMISSIBLE: Rule 1 violated, Rule 2 violated, Rule 3 violated, \
             Rule 4 violated, Rule 5 violated, Rule 6 violated",
        ));
}

#[test]
fn evaluate_json_output() {
    let dir = workspace();
    std::fs::write(dir.path().join("b.json"), SCENARIO_B_JSON).unwrap();

    let output = cmd(&dir)
        .args(["--format", "json", "evaluate", "b.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["permissible"], false);
    let ids: Vec<u64> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn evaluate_from_stdin() {
    let dir = workspace();

    cmd(&dir)
        .arg("evaluate")
        .write_stdin(SCENARIO_A)
        .assert()
        .success()
        .stdout(contains("PERMISSIBLE"));
}

#[test]
fn evaluate_json_from_stdin() {
    let dir = workspace();

    cmd(&dir)
        .arg("evaluate")
        .write_stdin(SCENARIO_B_JSON)
        .assert()
        .success()
        .stdout(contains("IMPERMISSIBLE: Rule 1 violated"))
        .stdout(contains("Rule 6 violated"));
}

#[test]
fn evaluate_json_from_stdin_with_byte_order_mark() {
    let dir = workspace();

    cmd(&dir)
        .arg("evaluate")
        .write_stdin(format!("\u{feff}{SCENARIO_B_JSON}"))
        .assert()
        .success()
        .stdout(contains("IMPERMISSIBLE"));
}

#[test]
fn null_fact_on_stdin_exits_with_incomplete_input() {
    let dir = workspace();
    let input = SCENARIO_B_JSON.replace("\"has_consent\": false", "\"has_consent\": null");

    cmd(&dir)
        .arg("evaluate")
        .write_stdin(input)
        .assert()
        .code(2)
        .stdout(contains("PERMISSIBLE").not())
        .stderr(contains("Cannot evaluate"))
        .stderr(contains("has_consent"));
}

#[test]
fn overrides_change_the_verdict() {
    let dir = workspace();
    std::fs::write(dir.path().join("a.toml"), SCENARIO_A).unwrap();

    cmd(&dir)
        .args([
            "evaluate",
            "a.toml",
            "--set",
            "violates_privacy=true",
            "--set",
            "uses_historical_data=true",
        ])
        .assert()
        .success()
        .stdout(contains("IMPERMISSIBLE: Rule 3 violated, Rule 6 violated"));
}

#[test]
fn override_keys_match_facts_file_keys() {
    let dir = workspace();
    std::fs::write(dir.path().join("a.toml"), SCENARIO_A).unwrap();

    cmd(&dir)
        .args(["evaluate", "a.toml", "--set", "HAS-CONSENT=true"])
        .assert()
        .code(1)
        .stderr(contains("Unknown fact"));

    cmd(&dir)
        .arg("evaluate")
        .write_stdin(SCENARIO_A.replace("has_consent", "HAS_CONSENT"))
        .assert()
        .code(1)
        .stderr(contains("HAS_CONSENT"));
}

#[test]
fn missing_fact_exits_with_incomplete_input() {
    let dir = workspace();
    let partial = SCENARIO_A.replace("has_consent = false\n", "");
    std::fs::write(dir.path().join("partial.toml"), partial).unwrap();

    cmd(&dir)
        .args(["evaluate", "partial.toml"])
        .assert()
        .code(2)
        .stdout(contains("PERMISSIBLE").not())
        .stderr(contains("has_consent"));
}

#[test]
fn unknown_fact_is_rejected() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("extra.toml"),
        format!("{SCENARIO_A}prevents_minor_harm = true\n"),
    )
    .unwrap();

    cmd(&dir)
        .args(["evaluate", "extra.toml"])
        .assert()
        .code(1)
        .stderr(contains("prevents_minor_harm"));
}

#[test]
fn missing_facts_file_fails() {
    let dir = workspace();

    cmd(&dir)
        .args(["evaluate", "nope.toml"])
        .assert()
        .code(1)
        .stderr(contains("not found"));
}

#[test]
fn rules_lists_all_six() {
    let dir = workspace();

    cmd(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(contains("Rule 1"))
        .stdout(contains("unjustified-deception"))
        .stdout(contains("Rule 6"));
}

#[test]
fn rules_json_output() {
    let dir = workspace();

    let output = cmd(&dir)
        .args(["--format", "json", "rules"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 6);
    let ids: Vec<u64> = rules.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(rules[3]["code"], "unjustified-deception");
    assert_eq!(rules[4]["description"], "No Explanation / Traceability");
}

#[test]
fn scenarios_list_only_names_them() {
    let dir = workspace();

    cmd(&dir)
        .args(["scenarios", "--list"])
        .assert()
        .success()
        .stdout(contains("A Location-based Patrol Optimization"))
        .stdout(contains("B Individual Risk Scoring"))
        .stdout(contains("C Targeted Undercover Intervention"))
        .stdout(contains("expected").not());
}

#[test]
fn scenario_json_output() {
    let dir = workspace();

    let output = cmd(&dir)
        .args(["--format", "json", "scenarios", "b"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = json.as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["scenario"], "b");
    assert_eq!(outcomes[0]["matches"], true);
    assert_eq!(outcomes[0]["verdict"]["permissible"], false);
    assert_eq!(
        outcomes[0]["verdict"]["violations"].as_array().unwrap().len(),
        6
    );
}

#[test]
fn scenarios_match_predictions() {
    let dir = workspace();

    cmd(&dir)
        .arg("scenarios")
        .assert()
        .success()
        .stdout(contains("Scenario A"))
        .stdout(contains("Scenario B"))
        .stdout(contains("Scenario C"));
}

#[test]
fn unknown_scenario_fails() {
    let dir = workspace();

    cmd(&dir)
        .args(["scenarios", "z"])
        .assert()
        .code(1)
        .stderr(contains("Unknown scenario"));
}

#[test]
fn init_writes_template_once() {
    let dir = workspace();

    cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join("action.toml").exists());

    cmd(&dir).arg("init").assert().code(1).stderr(contains("--force"));
    cmd(&dir).args(["init", "--force"]).assert().success();

    cmd(&dir)
        .args(["evaluate", "action.toml"])
        .assert()
        .success()
        .stdout(contains("PERMISSIBLE"));
}

#[test]
fn config_file_sets_default_format() {
    let dir = workspace();
    std::fs::write(dir.path().join("egf.toml"), "[output]\nformat = \"json\"\n").unwrap();
    std::fs::write(dir.path().join("a.toml"), SCENARIO_A).unwrap();

    cmd(&dir)
        .args(["evaluate", "a.toml"])
        .assert()
        .success()
        .stdout(contains("\"permissible\": true"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = workspace();

    cmd(&dir)
        .args(["--config", "missing.toml", "rules"])
        .assert()
        .code(1)
        .stderr(contains("Configuration file not found"));
}

#[test]
fn version_prints_package_version() {
    let dir = workspace();

    cmd(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "egf {}",
            env!("CARGO_PKG_VERSION")
        )));
}
