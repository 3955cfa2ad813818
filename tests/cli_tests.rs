//! CLI integration tests

use std::process::Command;

fn clipkeep_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipkeep"));
    cmd.env_remove("CLIPKEEP_CONFIG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_output() {
    let output = clipkeep_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Clipboard history"));
    assert!(stdout.contains("--portrait"));
    assert!(stdout.contains("--landscape"));
    assert!(stdout.contains("--ms"));
    assert!(stdout.contains("--entries"));
    assert!(stdout.contains("--notify"));
    assert!(stdout.contains("select-all"));
    assert!(stdout.contains("copy"));
    assert!(stdout.contains("delete"));
}

#[test]
fn version_output() {
    let output = clipkeep_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipkeep"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = clipkeep_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipkeep"));
    assert!(stdout.contains("config.json"));
}

#[test]
fn config_path_honors_file_flag() {
    let output = clipkeep_bin()
        .args(["config", "path", "-f", "/tmp/elsewhere/clips.json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "/tmp/elsewhere/clips.json");
}

#[test]
fn config_list_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"log":[{"Value":"a","Selected":false}],"captureIntervalMs":250,"maxEntries":0,"darkMode":true,"secrets":null}"#,
    )
    .unwrap();

    let output = clipkeep_bin()
        .arg("config")
        .arg("list")
        .arg("-f")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value_of = |key: &str| {
        stdout
            .lines()
            .find(|line| line.contains(key))
            .and_then(|line| line.rsplit(": ").next())
            .map(str::to_string)
    };
    assert_eq!(value_of("captureIntervalMs").as_deref(), Some("250"));
    assert_eq!(value_of("maxEntries").as_deref(), Some("100"));
    assert_eq!(value_of("darkMode").as_deref(), Some("true"));
    assert_eq!(value_of("secrets").as_deref(), Some("0 masks"));
    assert_eq!(value_of("log").as_deref(), Some("1 entry"));
}

#[test]
fn config_help() {
    let output = clipkeep_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn set_help_lists_settings() {
    let output = clipkeep_bin()
        .args(["set", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("interval"));
    assert!(stdout.contains("entries"));
    assert!(stdout.contains("dark-mode"));
}

// Running without a subcommand starts the daemon, which watches the real
// clipboard; that path is covered by unit tests instead.
