//! CLI smoke tests: drive the built binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_echosphere"));
    cmd.env_remove("ECHOSPHERE_CONFIG");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
        .collect()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("echosphere_smoke_{}_{}", std::process::id(), name))
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Expected usage info in --help output");
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("echosphere"), "Expected binary name in --version output");
}

#[test]
fn test_analyzes_positional_messages() {
    let output = cli_bin()
        .arg("I'm so happy today! This is amazing!")
        .arg("Just a normal day, nothing special.")
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["emotion"], "happy");
    assert_eq!(lines[0]["emoji"], "😊");
    assert_eq!(lines[0]["text"], "I'm so happy today! This is amazing!");
    assert!(lines[0]["pattern_scores"]["happy"].as_f64().unwrap() > 0.5);
    assert_eq!(lines[1]["emotion"], "neutral");
    assert!(lines[1]["vader_scores"]["compound"].is_number());
}

#[test]
fn test_reads_stdin_when_no_messages() {
    let mut child = cli_bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn");
    child
        .stdin
        .take()
        .unwrap()
        .write_all("scared scared scared\n\nsad, sad, sad\n".as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 2, "blank line is skipped");
    assert_eq!(lines[0]["emotion"], "fearful");
    assert_eq!(lines[1]["emotion"], "sad");
}

#[test]
fn test_reads_file_and_appends_summary() {
    let path = temp_path("messages.txt");
    std::fs::write(&path, "sad, sad, sad\nsad and upset, crying\nyay yay, so happy\n").unwrap();

    let output = cli_bin()
        .arg("--file")
        .arg(&path)
        .arg("--summary")
        .output()
        .expect("failed to run");
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 4);
    let summary = &lines[3];
    assert_eq!(summary["total_messages"], 3);
    assert_eq!(summary["most_common_emotion"], "sad");
    assert_eq!(summary["counts"]["sad"], 2);
}

#[test]
fn test_missing_file_is_an_error() {
    let output = cli_bin()
        .arg("--file")
        .arg(temp_path("does_not_exist.txt"))
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read messages"), "stderr: {}", stderr);
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let output = cli_bin()
        .arg("--config")
        .arg("/tmp/nonexistent_echosphere_config_12345.toml")
        .arg("sad, sad, sad")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let lines = json_lines(&output.stdout);
    assert_eq!(lines[0]["emotion"], "sad");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_config_is_an_error() {
    let path = temp_path("bad.toml");
    std::fs::write(&path, "[patterns]\nmatch_weight = \"heavy\"\n").unwrap();

    let output = cli_bin()
        .arg("--config")
        .arg(&path)
        .arg("sad, sad, sad")
        .output()
        .expect("failed to run");
    let _ = std::fs::remove_file(&path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse TOML config"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_values_are_an_error() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[fusion]\nempty_confidence = 3.0\n").unwrap();

    let output = cli_bin()
        .env("ECHOSPHERE_CONFIG", &path)
        .arg("sad, sad, sad")
        .output()
        .expect("failed to run");
    let _ = std::fs::remove_file(&path);
    assert!(!output.status.success());
}

#[test]
fn test_file_conflicts_with_positional_messages() {
    let output = cli_bin()
        .arg("--file")
        .arg(temp_path("unused.txt"))
        .arg("sad, sad, sad")
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {}", stderr);
}

#[test]
fn test_config_changes_pattern_weight() {
    let path = temp_path("config.toml");
    std::fs::write(&path, "[patterns]\nmatch_weight = 0.1\n").unwrap();

    let output = cli_bin()
        .arg("--config")
        .arg(&path)
        .arg("sad, sad, sad")
        .output()
        .expect("failed to run");
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    let sad = lines[0]["pattern_scores"]["sad"].as_f64().unwrap();
    assert!((sad - 0.3).abs() < 1e-9, "sad = {}", sad);
}

#[test]
fn test_pretty_output_spans_lines() {
    let output = cli_bin()
        .arg("--pretty")
        .arg("hello")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().count() > 1);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["text"], "hello");
}
