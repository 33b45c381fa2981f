#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn boardsync_cmd(dir: &Path, state: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("boardsync"));
    cmd.current_dir(dir)
        .env("BOARDSYNC_STATE_PATH", state.as_os_str())
        .env("XDG_CONFIG_HOME", dir.join("config").as_os_str())
        .env_remove("RUST_LOG");
    cmd
}

fn setup() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("agent-state.json");
    (temp, state)
}

fn read_state(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_add_creates_state_from_nothing() {
    let (temp, state) = setup();

    boardsync_cmd(temp.path(), &state)
        .args(["add", "Deploy API"])
        .assert()
        .success()
        .stdout(predicate::str::contains("State updated: add"));

    let value = read_state(&state);
    assert_eq!(value["elements"][0]["label"], "Deploy API");
    assert_eq!(value["elements"][0]["agent"], "Dolsoe");
    assert_eq!(value["logs"][0]["message"], "Deployed node: Deploy API");
    assert_eq!(value["logs"][0]["type"], "success");
    assert_eq!(value["links"], serde_json::json!([]));
}

#[test]
fn test_log_defaults_to_ping() {
    let (temp, state) = setup();

    boardsync_cmd(temp.path(), &state)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("State updated: log"));

    let value = read_state(&state);
    assert_eq!(value["logs"][0]["message"], "Ping");
    assert_eq!(value["logs"][0]["type"], "info");
}

#[test]
fn test_logs_stay_bounded_across_runs() {
    let (temp, state) = setup();

    for i in 0..22 {
        boardsync_cmd(temp.path(), &state)
            .args(["log", &format!("tick {}", i)])
            .assert()
            .success();
    }

    let value = read_state(&state);
    let logs = value["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 20);
    assert_eq!(logs[19]["message"], "tick 21");
}

#[test]
fn test_missing_command_prints_usage() {
    let (temp, state) = setup();

    boardsync_cmd(temp.path(), &state)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!state.exists());
}

#[test]
fn test_unknown_command_fails_without_writing() {
    let (temp, state) = setup();

    boardsync_cmd(temp.path(), &state)
        .args(["wipe", "everything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: boardsync [add|log]"))
        .stderr(predicate::str::contains("Unknown command: wipe"));

    assert!(!state.exists());
}

#[test]
fn test_local_config_file_sets_state_path() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("boardsync.toml"),
        "state_path = \"board/state.json\"\ndefault_agent = \"GPT-4o\"\n",
    )
    .unwrap();

    Command::new(cargo_bin("boardsync"))
        .current_dir(temp.path())
        .env_remove("BOARDSYNC_STATE_PATH")
        .env_remove("BOARDSYNC_DEFAULT_AGENT")
        .env("XDG_CONFIG_HOME", temp.path().join("config").as_os_str())
        .args(["add", "From config"])
        .assert()
        .success();

    let value = read_state(&temp.path().join("board").join("state.json"));
    assert_eq!(value["elements"][0]["agent"], "GPT-4o");
    assert_eq!(value["elements"][0]["color"], "#00ffff");
}

#[test]
fn test_corrupt_state_is_replaced_with_warning() {
    let (temp, state) = setup();
    fs::write(&state, "{ half written").unwrap();

    boardsync_cmd(temp.path(), &state)
        .args(["log", "fresh start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Discarding unreadable board"));

    let value = read_state(&state);
    assert_eq!(value["logs"][0]["message"], "fresh start");
}

#[test]
fn test_unreadable_state_fails_without_writing() {
    let (temp, state) = setup();
    fs::create_dir_all(state.join("keep")).unwrap();

    boardsync_cmd(temp.path(), &state)
        .args(["add", "Deploy API"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));

    assert!(state.join("keep").is_dir());
}
