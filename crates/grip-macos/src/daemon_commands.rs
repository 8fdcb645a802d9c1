use grip_core::Mode;
use grip_core::ipc::{Command, Response};

/// Builds the reply to a CLI command.
///
/// Returns the response and whether the daemon should shut down.
pub(super) fn handle_command(command: &Command, mode: Mode) -> (Response, bool) {
    match command {
        Command::Status => (
            Response::ok_with_message(format!(
                "PID {}, mode: {mode}",
                std::process::id()
            )),
            false,
        ),
        Command::Stop => {
            grip_core::log_info!("Stop requested over IPC");
            (Response::ok(), true)
        }
    }
}
