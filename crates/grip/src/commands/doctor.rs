use grip_core::config;

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";
const FIXED: &str = "\x1b[36m[fixed]\x1b[0m";

pub fn execute() {
    super::banner::print_logo();
    println!();
    check_config_dir();
    check_config_file();
    check_permission();
    check_daemon();
    check_autostart();
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                println!("  {FIXED} Created config directory ({})", dir.display());
            }
            Err(e) => {
                println!("  {FAIL} Config directory missing and could not create it: {e}");
            }
        },
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return;
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return;
    }
    match config::try_load() {
        Ok(cfg) if cfg.gestures.is_valid() => {
            println!("  {OK} config.toml is valid");
        }
        Ok(_) => {
            println!("  {WARN} config.toml gestures are empty or identical (using defaults)");
        }
        Err(e) => println!("  {FAIL} config.toml: {e}"),
    }
}

fn check_permission() {
    if grip_macos::permission::is_trusted(false) {
        println!("  {OK} Accessibility access granted");
    } else {
        println!(
            "  {FAIL} Accessibility access not granted \
             (System Settings > Privacy & Security > Accessibility)"
        );
    }
}

fn check_daemon() {
    if grip_macos::ipc::is_daemon_running() {
        if let Ok(Some(pid)) = grip_core::pid::read_pid_file() {
            println!("  {OK} Daemon is running (PID: {pid})");
        } else {
            println!("  {OK} Daemon is running");
        }
        return;
    }
    if let Ok(Some(pid)) = grip_core::pid::read_pid_file() {
        if grip_macos::process::is_process_alive(pid) {
            println!("  {WARN} Process exists (PID: {pid}) but not responding");
        } else {
            let _ = grip_core::pid::remove_pid_file();
            println!("  {FIXED} Removed stale PID file (PID: {pid})");
        }
    } else {
        println!("  {WARN} Daemon is not running");
    }
}

fn check_autostart() {
    if grip_macos::autostart::is_enabled() {
        println!("  {OK} Starts at login");
    } else {
        println!("  {WARN} Does not start at login (run 'grip autostart enable')");
    }
}
