use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::GripResult;

/// File name of the Unix domain socket inside the data directory.
pub const SOCKET_NAME: &str = "grip.sock";

/// Returns the socket path used for IPC between CLI and daemon.
pub fn socket_path() -> GripResult<PathBuf> {
    Ok(crate::pid::data_dir()?.join(SOCKET_NAME))
}

/// A command sent from the CLI to the daemon.
///
/// These are serialized as one JSON line over the socket.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop.
    Stop,
    /// Request the daemon's current status.
    Status,
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_uses_tagged_json() {
        // Act
        let json = serde_json::to_string(&Command::Stop).unwrap();

        // Assert
        assert_eq!(json, r#"{"command":"Stop"}"#);
    }

    #[test]
    fn command_parses_from_wire_format() {
        // Act
        let command: Command = serde_json::from_str(r#"{"command":"Status"}"#).unwrap();

        // Assert
        assert_eq!(command, Command::Status);
    }

    #[test]
    fn ok_response_omits_empty_message() {
        // Act
        let json = serde_json::to_string(&Response::ok()).unwrap();

        // Assert
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn error_response_carries_message() {
        // Act
        let response: Response =
            serde_json::from_str(r#"{"status":"error","message":"boom"}"#).unwrap();

        // Assert
        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.message.as_deref(), Some("boom"));
    }
}
