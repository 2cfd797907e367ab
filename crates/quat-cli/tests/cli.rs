//! CLI command integration tests.
//! Each test writes its puzzle config into a temp directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = r#"
[edgework]
serial = "AB1C23"
lit_indicators = []
unlit_indicators = ["FRK"]
batteries = 2
ports = ["parallel"]

[layout]
roles = ["red", "green", "blue", "yellow"]
buttons = ["red", "yellow", "green", "red", "white", "blue", "yellow", "white", "green", "blue"]
submit = "white"
clear = "yellow"
"#;

const EDGEWORK_ONLY: &str = r#"
[edgework]
serial = "XK4LE9"
lit_indicators = ["BOB"]
batteries = 3
ports = ["ps2"]
"#;

fn quat_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quat").unwrap();
    cmd.env_remove("QUAT_CONFIG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn solve_scenario() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, SCENARIO);

    quat_cmd()
        .arg("solve")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("table A:    Blue, Yellow"))
        .stdout(predicate::str::contains("inverted:   [10, 8, 5, -1, -3, -2, 9, 6]"))
        .stdout(predicate::str::contains("q₁ = 10-8i-5j+1k (conjugated)"))
        .stdout(predicate::str::contains("q₂q₁ = -7+43i+59j+139k"))
        .stdout(predicate::str::contains("answer:     24700"));
}

#[test]
fn config_from_env() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, SCENARIO);

    quat_cmd()
        .env("QUAT_CONFIG", &config)
        .arg("solve")
        .assert()
        .success()
        .stdout(predicate::str::contains("answer:     24700"));
}

#[test]
fn seeded_layout_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, EDGEWORK_ONLY);

    let run = || {
        let output = quat_cmd()
            .args(["solve", "--seed", "1234", "--config"])
            .arg(&config)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).to_string()
    };
    let first = run();
    assert!(first.contains("answer:"));
    assert_eq!(first, run());
}

#[test]
fn play_strike_then_solve() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, SCENARIO);

    quat_cmd()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .write_stdin("help\npress 24701\nsubmit 24700\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("display: 24701"))
        .stdout(predicate::str::contains("strike!"))
        .stdout(predicate::str::contains("correct! module disarmed"));
}

#[test]
fn play_rejects_unknown_commands() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, SCENARIO);

    quat_cmd()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .write_stdin("cycle\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognized command: cycle"))
        .stdout(predicate::str::contains("strikes: 0"));
}

#[test]
fn export_writes_derivation() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, SCENARIO);
    let out = dir.path().join("derivation.json");

    quat_cmd()
        .arg("export")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .arg("--id")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let content = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["module"], 7);
    assert_eq!(json["derivation"]["answer"], 24700);
    assert_eq!(json["derivation"]["order"], "q2_q1");
    assert_eq!(json["table_a"]["blue"], true);
    assert_eq!(json["layout"]["submit"], "white");
}

#[test]
fn invalid_layout_fails() {
    let dir = TempDir::new().unwrap();
    let bad = SCENARIO.replace(
        r#"roles = ["red", "green", "blue", "yellow"]"#,
        r#"roles = ["red", "green", "red", "yellow"]"#,
    );
    let config = write_config(&dir, &bad);

    quat_cmd()
        .arg("solve")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid layout"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    quat_cmd()
        .arg("solve")
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
