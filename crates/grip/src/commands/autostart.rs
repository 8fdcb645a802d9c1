//! Manages starting Grip at login.
//!
//! Delegates to [`grip_macos::autostart`] for the LaunchAgent plist.

pub fn enable() {
    match grip_macos::autostart::enable() {
        Ok(()) => println!("Autostart enabled. Grip will start when you log in."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn disable() {
    match grip_macos::autostart::disable() {
        Ok(()) => println!("Autostart disabled."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn status() {
    if grip_macos::autostart::is_enabled() {
        println!("Autostart is currently enabled.");
    } else {
        println!("Autostart is currently disabled.");
    }
}
