use std::sync::mpsc;

use grip_core::ipc::{Command, Response};

use crate::ipc::SocketServer;

use super::daemon_types::{DaemonMsg, ResponseSender};

/// Accepts IPC connections in a loop and forwards commands to the
/// main daemon thread. Runs on a dedicated thread.
///
/// Returns after forwarding a stop command; the socket file is removed
/// when `server` drops.
pub(super) fn ipc_loop(server: SocketServer, tx: mpsc::Sender<DaemonMsg>) {
    loop {
        let connection = match server.accept() {
            Ok(c) => c,
            Err(e) => {
                grip_core::log_error!("IPC accept failed: {e}");
                return;
            }
        };

        let command = match connection.read_command() {
            Ok(Some(cmd)) => cmd,
            // Liveness probe.
            Ok(None) => continue,
            Err(e) => {
                grip_core::log_warn!("Error reading command: {e}");
                let _ = connection.send_response(&Response::error(format!("bad command: {e}")));
                continue;
            }
        };

        let (reply_tx, reply_rx): (ResponseSender, _) = mpsc::channel();
        let is_stop = matches!(command, Command::Stop);

        if tx.send(DaemonMsg::Command(command, reply_tx)).is_err() {
            return;
        }

        if let Ok(response) = reply_rx.recv() {
            let _ = connection.send_response(&response);
        }

        if is_stop {
            return;
        }
    }
}
