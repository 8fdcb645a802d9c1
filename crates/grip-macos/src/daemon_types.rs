use std::sync::mpsc;

use grip_core::Mode;
use grip_core::ipc::{Command, Response};

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// The modifier observer classified a new key state.
    Mode(Mode),
    /// The pointer moved while a gesture is active.
    MouseMoved,
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
