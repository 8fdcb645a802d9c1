use grip_core::GripResult;

#[cfg(any(target_os = "macos", test))]
#[path = "daemon_commands.rs"]
mod daemon_commands;
#[cfg(target_os = "macos")]
#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[cfg(target_os = "macos")]
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[cfg(target_os = "macos")]
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the Grip daemon.
///
/// Starts the event tap thread (modifier changes and mouse moves) and
/// the IPC listener. The main thread owns the gesture engine.
#[cfg(target_os = "macos")]
pub fn run() -> GripResult<()> {
    grip_core::pid::write_pid_file()?;
    eprintln!("Grip daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = grip_core::pid::remove_pid_file();

    result
}

#[cfg(not(target_os = "macos"))]
pub fn run() -> GripResult<()> {
    Err(crate::UNSUPPORTED.into())
}
