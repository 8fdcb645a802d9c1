use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs the binary with `HOME` pointed at a fresh directory so no test
/// touches the real config, data dir or LaunchAgents.
fn run_isolated(name: &str, args: &[&str]) -> (Output, PathBuf) {
    let home = std::env::temp_dir().join(format!("grip-cli-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_grip"))
        .args(args)
        .env("HOME", &home)
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .output()
        .expect("failed to execute grip");
    (output, home)
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_grip"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute grip");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("holding modifier keys"));
    assert!(stdout.contains("autostart"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_grip"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute grip");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("grip"));
}

#[test]
fn unknown_subcommand_fails() {
    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_grip"))
        .arg("tile")
        .output()
        .expect("failed to execute grip");

    // Assert
    assert!(!output.status.success());
}

#[test]
fn init_writes_default_config_once() {
    // Act
    let (first, home) = run_isolated("init", &["init"]);
    let second = Command::new(env!("CARGO_BIN_EXE_grip"))
        .arg("init")
        .env("HOME", &home)
        .output()
        .expect("failed to execute grip");

    // Assert
    assert!(first.status.success());
    let config = std::fs::read_to_string(home.join(".config/grip/config.toml")).unwrap();
    assert!(config.contains("[gestures]"));
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Already exists"));
}

#[test]
fn status_reports_not_running() {
    // Act
    let (output, _) = run_isolated("status", &["status"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Grip is not running"));
}

#[test]
fn autostart_status_defaults_to_disabled() {
    // Act
    let (output, _) = run_isolated("autostart", &["autostart", "status"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("disabled"));
}
