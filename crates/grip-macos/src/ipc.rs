use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::time::Duration;

use grip_core::GripResult;
use grip_core::ipc::{Command, Response, socket_path};

/// How long the CLI waits for the daemon to answer.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(2);

/// A Unix domain socket server that the daemon uses to accept CLI
/// connections.
///
/// Each connection carries one JSON command line and receives one JSON
/// response line. The socket file is removed when the server is dropped.
pub struct SocketServer {
    listener: UnixListener,
    path: PathBuf,
}

impl SocketServer {
    /// Binds the daemon socket, replacing a stale socket file left by a
    /// daemon that did not shut down cleanly.
    pub fn bind() -> GripResult<Self> {
        Self::bind_at(socket_path()?)
    }

    fn bind_at(path: PathBuf) -> GripResult<Self> {
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        let listener = UnixListener::bind(&path)?;
        Ok(Self { listener, path })
    }

    /// Blocks until a client connects and returns the connection.
    pub fn accept(&self) -> GripResult<Connection> {
        let (stream, _) = self.listener.accept()?;
        Ok(Connection { stream })
    }
}

impl Drop for SocketServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// One accepted client connection.
pub struct Connection {
    stream: UnixStream,
}

impl Connection {
    /// Reads the client's command.
    ///
    /// Returns `Ok(None)` when the client closed without sending
    /// anything, which is how [`is_daemon_running`] probes the socket.
    pub fn read_command(&self) -> GripResult<Option<Command>> {
        let mut reader = BufReader::new(&self.stream);
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(line.trim())?))
    }

    /// Sends the response and closes the connection.
    pub fn send_response(mut self, response: &Response) -> GripResult<()> {
        let json = serde_json::to_string(response)?;
        writeln!(self.stream, "{json}")?;
        self.stream.flush()?;
        Ok(())
    }
}

/// Sends a command to the daemon and returns its response.
///
/// This is used by the CLI (client side).
pub fn send_command(command: &Command) -> GripResult<Response> {
    send_command_at(&socket_path()?, command)
}

fn send_command_at(path: &Path, command: &Command) -> GripResult<Response> {
    let mut stream = UnixStream::connect(path)?;
    stream.set_read_timeout(Some(CLIENT_TIMEOUT))?;

    let json = serde_json::to_string(command)?;
    writeln!(stream, "{json}")?;
    stream.flush()?;

    let mut reader = BufReader::new(&stream);
    let mut response_line = String::new();
    reader.read_line(&mut response_line)?;

    Ok(serde_json::from_str(response_line.trim())?)
}

/// Checks whether a daemon is listening on the socket.
///
/// Connects and immediately closes; the daemon treats an empty
/// connection as a probe.
pub fn is_daemon_running() -> bool {
    socket_path().is_ok_and(|p| UnixStream::connect(p).is_ok())
}
