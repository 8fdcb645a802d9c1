pub fn execute() {
    if let Err(e) = grip_macos::daemon::run() {
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
