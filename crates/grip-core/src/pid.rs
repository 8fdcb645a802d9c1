use std::fs;
use std::path::PathBuf;

use crate::GripResult;

/// Returns the path to the Grip data directory.
///
/// On macOS: `~/Library/Application Support/grip`.
/// Creates the directory if it doesn't exist.
pub fn data_dir() -> GripResult<PathBuf> {
    let base = dirs::data_local_dir().ok_or("could not determine local data directory")?;
    let dir = base.join("grip");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the path to the PID file.
pub fn pid_path() -> GripResult<PathBuf> {
    Ok(data_dir()?.join("grip.pid"))
}

/// Writes the current process's PID to the PID file.
///
/// Called when the daemon starts. The PID file lets the CLI detect a
/// daemon whose socket stopped answering and kill it.
pub fn write_pid_file() -> GripResult<()> {
    fs::write(pid_path()?, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> GripResult<Option<u32>> {
    let path = pid_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    Ok(Some(parse_pid(&contents)?))
}

/// Removes the PID file.
///
/// Called when the daemon shuts down cleanly.
pub fn remove_pid_file() -> GripResult<()> {
    let path = pid_path()?;

    if path.exists() {
        fs::remove_file(&path)?;
    }

    Ok(())
}

fn parse_pid(contents: &str) -> GripResult<u32> {
    contents
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid PID file contents: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_trims_whitespace() {
        // Act
        let pid = parse_pid("1234\n").unwrap();

        // Assert
        assert_eq!(pid, 1234);
    }

    #[test]
    fn parse_pid_rejects_garbage() {
        // Act
        let result = parse_pid("not-a-pid");

        // Assert
        assert!(result.is_err());
    }
}
