use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;

/// Checks whether a process with the given PID is still alive.
///
/// Sends signal 0, which performs the existence and permission checks
/// without delivering anything. Used to detect stale PID files left
/// behind when the daemon is killed without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    to_pid(pid).is_some_and(|pid| kill(pid, None).is_ok())
}

/// Asks the process to terminate (SIGTERM).
///
/// Returns `true` if the signal was delivered.
pub fn kill_process(pid: u32) -> bool {
    to_pid(pid).is_some_and(|pid| kill(pid, Signal::SIGTERM).is_ok())
}

/// Zero and values past `i32::MAX` would address process groups.
fn to_pid(pid: u32) -> Option<Pid> {
    i32::try_from(pid)
        .ok()
        .filter(|&raw| raw > 0)
        .map(Pid::from_raw)
}
