use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Marker file that records the login hint has been shown.
const LOGIN_HINT_MARKER: &str = "login-hint-shown";

pub fn execute() {
    if grip_macos::ipc::is_daemon_running() {
        println!("Grip is already running.");
        return;
    }

    // Clean up stale PID file from a previous unclean shutdown
    if let Ok(Some(pid)) = grip_core::pid::read_pid_file() {
        if grip_macos::process::is_process_alive(pid) {
            println!("Grip process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = grip_core::pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not resolve executable path: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand in a new
    // process group, so Ctrl+C in this terminal doesn't reach it.
    let child = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn();

    let pid = match child {
        Ok(child) => child.id(),
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    };

    print_banner(pid);
    show_login_hint_once();
}

/// Tips shown on startup, rotated so users see a different one each
/// time they start the daemon.
const TIPS: &[&str] = &[
    "Hold ctrl+cmd and move the mouse to drag a window",
    "Hold ctrl+cmd+alt and move the mouse to resize a window",
    "Run 'grip doctor' to check your setup",
    "Run 'grip status' to see the current gesture mode",
    "Change key combinations in ~/.config/grip/config.toml",
    "Run 'grip debug events' to watch modifier keys live",
];

fn print_banner(pid: u32) {
    let d = "\x1b[90m"; // Dim gray, labels
    let w = "\x1b[1;97m"; // Bold bright white, values
    let r = "\x1b[0m";
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let tip = TIPS[secs as usize % TIPS.len()];

    super::banner::print_logo();
    println!();
    println!("  {d}Config{r}   ~/.config/grip/");
    println!("  {d}Daemon{r}   Started (PID: {w}{pid}{r})");
    println!("  {d}Tip{r}      {tip}");
    println!();
}

/// Suggests `grip autostart enable` the first time Grip is started
/// while it is not registered as a login item.
fn show_login_hint_once() {
    let Some(marker) = login_hint_marker() else {
        return;
    };
    if !should_show_login_hint(grip_macos::autostart::is_enabled(), marker.exists()) {
        return;
    }
    println!("  Run 'grip autostart enable' to start Grip when you log in.");
    println!();
    let _ = std::fs::write(&marker, "");
}

fn login_hint_marker() -> Option<PathBuf> {
    grip_core::pid::data_dir()
        .ok()
        .map(|dir| dir.join(LOGIN_HINT_MARKER))
}

fn should_show_login_hint(autostart_enabled: bool, already_shown: bool) -> bool {
    !autostart_enabled && !already_shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_shows_once_when_autostart_is_off() {
        // Act / Assert
        assert!(should_show_login_hint(false, false));
        assert!(!should_show_login_hint(false, true));
    }

    #[test]
    fn hint_never_shows_when_autostart_is_on() {
        // Act / Assert
        assert!(!should_show_login_hint(true, false));
    }
}
