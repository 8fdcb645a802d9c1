/// Watches modifier changes and the gesture modes they map to. Press
/// Ctrl+C to stop.
#[cfg(target_os = "macos")]
pub fn execute() {
    let config = grip_core::config::load();

    let mut watch = match grip_macos::debug::EventWatch::start(config.gestures) {
        Ok(watch) => watch,
        Err(e) => {
            eprintln!("Failed to start event tap: {e}");
            std::process::exit(1);
        }
    };

    println!("Watching modifier keys (press Ctrl+C to stop)...\n");

    while let Some(event) = watch.next_event() {
        println!("{event}");
    }
}

#[cfg(not(target_os = "macos"))]
pub fn execute() {
    eprintln!("Error: grip debug events is only available on macOS.");
    std::process::exit(1);
}
