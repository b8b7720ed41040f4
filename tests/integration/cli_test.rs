//! Integration tests for the slidecast CLI

use std::process::Command;

use tempfile::TempDir;

use crate::helpers::{fixtures_dir, temp_fixture};

/// Run slidecast with an isolated config file and capture output.
fn run_slidecast(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_slidecast"))
        .args(args)
        .env("SLIDECAST_CONFIG", config_dir.path().join("config.toml"))
        .env("SLIDECAST_LOG", "off")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute slidecast");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["play", "slides", "check", "config", "completions"] {
        assert!(stdout.contains(name), "missing {name} in help");
    }
}

#[test]
fn play_rejects_slide_zero() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_slidecast(&dir, &["play", "--slide", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--slide"));
}

// ============================================================================
// Slides Command Tests
// ============================================================================

#[test]
fn slides_json_describes_builtin_deck() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["slides", "--json"]);
    assert_eq!(exit_code, 0);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["fps"], 30);
    assert_eq!(report["total_duration"], 2640);
    assert_eq!(report["composition_length"], 2460);
    assert_eq!(report["sequences"].as_array().unwrap().len(), 20);
    assert_eq!(report["sequences"][2]["from"], 180);
    assert_eq!(report["sequences"][2]["duration_in_frames"], 240);
}

#[test]
fn slides_table_for_fixture_deck() {
    let dir = TempDir::new().unwrap();
    let deck = fixtures_dir().join("talk.toml");
    let (stdout, _stderr, exit_code) =
        run_slidecast(&dir, &["slides", "--deck", deck.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Lightning talk"));
    assert!(stdout.contains("Questions"));
    assert!(stdout.contains("540 frames"));
}

#[test]
fn slides_uses_deck_from_config() {
    let dir = TempDir::new().unwrap();
    let deck = fixtures_dir().join("talk.toml");
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[player]\ndeck = {:?}\n", deck.to_str().unwrap()),
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["slides", "--json"]);
    assert_eq!(exit_code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["title"], "Lightning talk");
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn check_accepts_valid_deck() {
    let dir = TempDir::new().unwrap();
    let (_fixture_dir, deck) = temp_fixture("talk.toml");
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["check", deck.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("4 slides"));
}

#[test]
fn check_rejects_out_of_order_deck() {
    let dir = TempDir::new().unwrap();
    let (_fixture_dir, deck) = temp_fixture("out_of_order.toml");

    assert_cmd::Command::cargo_bin("slidecast")
        .unwrap()
        .env("SLIDECAST_CONFIG", dir.path().join("config.toml"))
        .env("SLIDECAST_LOG", "off")
        .args(["check", deck.to_str().unwrap()])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn check_warns_about_zero_length_slide() {
    let dir = TempDir::new().unwrap();
    let deck = fixtures_dir().join("empty_slide.toml");
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["check", deck.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("slide 2 starts and ends at frame 90"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_migrate_yes_creates_file() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config updated"));
    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[player]"));
    assert!(written.contains("[logging]"));

    let (stdout, _stderr, _) = run_slidecast(&dir, &["config", "migrate", "--yes"]);
    assert!(stdout.contains("already up to date"));
}

#[test]
fn config_show_prints_toml() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("speed = 1.0"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_slidecast(&dir, &["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("slidecast"));
}
