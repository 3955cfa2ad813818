//! IPC (Inter-Process Communication) module for daemon control
//!
//! Control commands travel over a Unix Domain Socket as JSON lines, see
//! [`crate::cli::protocol`].

mod unix_socket;

pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;
use std::sync::Arc;

use super::protocol::{Request, Response};

/// Answers control requests inside the daemon
#[async_trait::async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: Request) -> Response;
}

/// Trait for IPC servers that listen for daemon commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept and handle connections
    ///
    /// Each connection carries one request, which is passed to `handler`;
    /// its response is written back before the connection closes.
    async fn run(&self, handler: Arc<dyn RequestHandler>) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Send a request and wait for the daemon's answer
    async fn send(&self, request: &Request) -> io::Result<Response>;
}

/// Create the IPC server at the default socket path
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

/// Create an IPC client for the default socket path
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}
