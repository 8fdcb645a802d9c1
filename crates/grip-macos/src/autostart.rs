//! Login item registration via a per-user LaunchAgent.
//!
//! Writes `~/Library/LaunchAgents/com.grip.agent.plist` so that
//! `grip start` runs when the user logs in. No elevation is required
//! since LaunchAgents in the home directory are per-user.

use std::path::{Path, PathBuf};

const LABEL: &str = "com.grip.agent";

/// Returns the LaunchAgent plist path.
pub fn plist_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| {
        h.join("Library")
            .join("LaunchAgents")
            .join(format!("{LABEL}.plist"))
    })
}

/// Registers Grip to start at login.
pub fn enable() -> Result<(), String> {
    let exe = std::env::current_exe().map_err(|e| format!("could not resolve exe path: {e}"))?;
    let path = plist_path().ok_or("could not determine home directory")?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }
    std::fs::write(&path, render_plist(&exe)).map_err(|e| format!("{}: {e}", path.display()))
}

/// Removes the LaunchAgent.
///
/// Returns `Ok(())` if the file was removed or didn't exist.
pub fn disable() -> Result<(), String> {
    let Some(path) = plist_path() else {
        return Ok(());
    };
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {e}", path.display())),
    }
}

/// Checks whether the LaunchAgent is installed.
pub fn is_enabled() -> bool {
    plist_path().is_some_and(|p| p.exists())
}

/// Renders the LaunchAgent plist that runs `<exe> start` at login.
pub fn render_plist(exe: &Path) -> String {
    let exe = xml_escape(&exe.display().to_string());
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{LABEL}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{exe}</string>
        <string>start</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#
    )
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plist_runs_start_at_load() {
        // Act
        let plist = render_plist(Path::new("/Applications/grip"));

        // Assert
        assert!(plist.contains("<string>com.grip.agent</string>"));
        assert!(plist.contains("<string>/Applications/grip</string>"));
        assert!(plist.contains("<string>start</string>"));
        assert!(plist.contains("<key>RunAtLoad</key>\n    <true/>"));
    }

    #[test]
    fn plist_escapes_exe_path() {
        // Act
        let plist = render_plist(Path::new("/Users/me/R&D <tools>/grip"));

        // Assert
        assert!(plist.contains("/Users/me/R&amp;D &lt;tools&gt;/grip"));
    }

    #[test]
    fn plist_path_lives_in_launch_agents() {
        // Act
        let Some(path) = plist_path() else {
            return;
        };

        // Assert
        assert!(path.ends_with("Library/LaunchAgents/com.grip.agent.plist"));
    }
}
