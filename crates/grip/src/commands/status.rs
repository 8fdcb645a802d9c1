use grip_core::ipc::{Command, ResponseStatus};

pub fn execute() {
    if grip_macos::ipc::is_daemon_running() {
        match grip_macos::ipc::send_command(&Command::Status) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Grip is running ({}).", response.message.unwrap_or_default());
            }
            _ => println!("Grip is running."),
        }
        return;
    }

    // Socket isn't answering. Check for a stale PID file left behind by
    // a daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = grip_core::pid::read_pid_file() {
        if grip_macos::process::is_process_alive(pid) {
            println!("Grip process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = grip_core::pid::remove_pid_file();
            println!("Grip is not running (cleaned up stale PID file).");
        }
    } else {
        println!("Grip is not running.");
    }
}
