use grip_core::ipc::{Command, ResponseStatus};

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if grip_macos::ipc::is_daemon_running() {
        match grip_macos::ipc::send_command(&Command::Stop) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Grip stopped.");
                let _ = grip_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the socket is gone but the process may still be alive.
    match grip_core::pid::read_pid_file() {
        Ok(Some(pid)) if grip_macos::process::is_process_alive(pid) => {
            if grip_macos::process::kill_process(pid) {
                let _ = grip_core::pid::remove_pid_file();
                println!("Grip stopped (killed PID {pid}).");
            } else {
                eprintln!("Failed to kill process {pid}.");
                std::process::exit(1);
            }
        }
        _ => {
            println!("Grip is not running.");
        }
    }
}
