use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use rig_core::{Command, HostingStatus, ProcessKind, Response, StopResult};
use serde::de::DeserializeOwned;

use super::{HostingControlService, HostingError, HostingStatusService};

/// Hosting service reached over its Unix control socket.
///
/// Every call opens a fresh connection and exchanges one command and one
/// response line.
#[derive(Debug, Clone)]
pub struct SocketHostingClient {
    socket: PathBuf,
    request_timeout: Duration,
}

impl SocketHostingClient {
    pub fn new(socket: impl Into<PathBuf>, request_timeout: Duration) -> Self {
        Self {
            socket: socket.into(),
            request_timeout,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket
    }

    async fn call(&self, command: &Command) -> Result<serde_json::Value, HostingError> {
        tracing::debug!(sock = %self.socket.display(), ?command, "hosting request");

        let exchange = rig_socket::request::<_, Response>(&self.socket, command);
        let response = match tokio::time::timeout(self.request_timeout, exchange).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                return Err(HostingError::Transport(format!(
                    "could not reach hosting service at {}: {}",
                    self.socket.display(),
                    e
                )));
            }
            Err(_) => {
                return Err(HostingError::Transport(format!(
                    "hosting service at {} did not answer within {}s",
                    self.socket.display(),
                    self.request_timeout.as_secs()
                )));
            }
        };

        match response {
            Response::Ok { data } => Ok(data),
            Response::Error { message } => Err(HostingError::Rejected(message)),
        }
    }

    async fn call_for<T: DeserializeOwned>(&self, command: &Command) -> Result<T, HostingError> {
        let data = self.call(command).await?;
        serde_json::from_value(data).map_err(|e| HostingError::Protocol(e.to_string()))
    }
}

#[async_trait]
impl HostingStatusService for SocketHostingClient {
    async fn fetch_hosting_status(&self) -> Result<HostingStatus, HostingError> {
        self.call_for(&Command::Status).await
    }
}

#[async_trait]
impl HostingControlService for SocketHostingClient {
    async fn start_backend(&self, command: &str, folder_path: &str) -> Result<(), HostingError> {
        self.call(&Command::StartBackend {
            command: command.to_string(),
            folder_path: folder_path.to_string(),
        })
        .await
        .map(|_| ())
    }

    async fn start_frontend(
        &self,
        folder_name: &str,
        is_local: bool,
        port: u16,
        folder_path: &str,
    ) -> Result<(), HostingError> {
        self.call(&Command::StartFrontend {
            folder_name: folder_name.to_string(),
            is_local,
            port,
            folder_path: folder_path.to_string(),
        })
        .await
        .map(|_| ())
    }

    async fn stop_hosting(&self, kind: ProcessKind) -> Result<StopResult, HostingError> {
        self.call_for(&Command::Stop { kind }).await
    }
}
