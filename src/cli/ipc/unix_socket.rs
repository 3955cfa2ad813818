//! Unix Domain Socket communication for daemon control

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

use super::{IpcClient, IpcServer, RequestHandler};
use crate::cli::protocol::{self, Request, Response};
use crate::cli::runtime_dir;

/// Socket file name inside the runtime directory
pub const SOCKET_NAME: &str = "clipkeep.sock";

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR
    pub fn new() -> Self {
        Self::with_path(runtime_dir().join(SOCKET_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix Domain Socket server for daemon commands
pub struct UnixSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl UnixSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }
}

impl Drop for UnixSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[async_trait]
impl IpcServer for UnixSocketServer {
    fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    fn path(&self) -> String {
        self.socket_path.path().to_string_lossy().to_string()
    }

    async fn run(&self, handler: Arc<dyn RequestHandler>) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, handler).await {
                            tracing::warn!(error = %e, "socket connection error");
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "socket accept error");
                }
            }
        }
    }

    fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

/// Handle a single client connection
async fn handle_connection(stream: UnixStream, handler: Arc<dyn RequestHandler>) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    reader.read_line(&mut line).await?;

    let response = match protocol::decode::<Request>(&line) {
        Ok(request) => {
            tracing::debug!(?request, "control request");
            handler.handle(request).await
        }
        Err(e) => Response::error(format!("invalid request: {}", e)),
    };

    writer.write_all(protocol::encode(&response)?.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Unix Domain Socket client for sending commands to daemon
pub struct UnixSocketClient {
    socket_path: SocketPath,
}

impl UnixSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }
}

#[async_trait]
impl IpcClient for UnixSocketClient {
    fn is_daemon_running(&self) -> bool {
        self.socket_path.exists()
    }

    async fn send(&self, request: &Request) -> io::Result<Response> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        let (reader, mut writer) = stream.into_split();

        writer.write_all(protocol::encode(request)?.as_bytes()).await?;
        writer.flush().await?;

        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        if reader.read_line(&mut response).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "daemon closed the connection",
            ));
        }

        protocol::decode(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl RequestHandler for Echo {
        async fn handle(&self, request: Request) -> Response {
            match request {
                Request::Show { position } => Response::Entry {
                    position,
                    value: format!("entry {}", position),
                },
                _ => Response::ok("done"),
            }
        }
    }

    #[test]
    fn socket_path_lives_in_runtime_dir() {
        let socket_path = SocketPath::new();
        assert_eq!(socket_path.path(), runtime_dir().join(SOCKET_NAME).as_path());
    }

    #[test]
    fn cleanup_of_missing_socket_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = SocketPath::with_path(dir.path().join("gone.sock"));
        assert!(!socket_path.exists());
        assert!(socket_path.cleanup().is_ok());
    }

    #[tokio::test]
    async fn client_and_server_exchange_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = SocketPath::with_path(dir.path().join("test.sock"));

        let mut server = UnixSocketServer::new(path.clone());
        server.bind().unwrap();
        let server = Arc::new(server);
        let running = Arc::clone(&server);
        let task = tokio::spawn(async move { running.run(Arc::new(Echo)).await });

        let client = UnixSocketClient::new(path);
        assert!(client.is_daemon_running());

        let response = client.send(&Request::Show { position: 2 }).await.unwrap();
        assert_eq!(
            response,
            Response::Entry {
                position: 2,
                value: "entry 2".to_string()
            }
        );
        let response = client.send(&Request::Save).await.unwrap();
        assert_eq!(response, Response::ok("done"));

        task.abort();
    }

    #[tokio::test]
    async fn garbage_request_gets_error_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = SocketPath::with_path(dir.path().join("garbage.sock"));

        let mut server = UnixSocketServer::new(path.clone());
        server.bind().unwrap();
        let server = Arc::new(server);
        let running = Arc::clone(&server);
        let task = tokio::spawn(async move { running.run(Arc::new(Echo)).await });

        let mut stream = UnixStream::connect(path.path()).await.unwrap();
        stream.write_all(b"toggle\n").await.unwrap();
        let mut reply = String::new();
        BufReader::new(stream).read_line(&mut reply).await.unwrap();

        match protocol::decode::<Response>(&reply).unwrap() {
            Response::Error { message } => assert!(message.starts_with("invalid request")),
            other => panic!("unexpected response: {:?}", other),
        }

        task.abort();
    }
}
