//! Local hosting of a project's front-end and back-end
//!
//! - **Services**: the status/control seams the hosting service is consumed through
//! - **Port**: front-end port resolution from the manifest
//! - **Run state**: the per-process status shown to the developer
//! - **Controller**: the lifecycle state machine tying the above together
//! - **Client**: the Unix socket implementation of the services

mod client;
mod controller;
mod port;
mod run_state;

pub use client::SocketHostingClient;
pub use controller::{HostingSnapshot, KindState, LifecycleController, ToggleError, ToggleOutcome};
pub use port::{PortError, resolve_frontend_port};
pub use run_state::{RunState, toggle_label};

use async_trait::async_trait;
use rig_core::{HostingStatus, ProcessKind, StopResult};
use thiserror::Error;

/// Hosting operation errors.
///
/// The `Display` output is what the developer sees as the process status, so
/// service-reported messages are passed through untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostingError {
    /// The hosting service refused or failed the operation.
    #[error("{0}")]
    Rejected(String),

    /// The hosting service could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The hosting service answered with something we could not decode.
    #[error("Unexpected response from hosting service: {0}")]
    Protocol(String),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error("Stop result for {got} received while stopping {expected}")]
    MismatchedStop {
        expected: ProcessKind,
        got: ProcessKind,
    },
}

/// Reports which processes are running for the active project.
#[async_trait]
pub trait HostingStatusService: Send + Sync {
    async fn fetch_hosting_status(&self) -> Result<HostingStatus, HostingError>;
}

/// Starts and stops hosted processes.
#[async_trait]
pub trait HostingControlService: Send + Sync {
    async fn start_backend(&self, command: &str, folder_path: &str) -> Result<(), HostingError>;

    async fn start_frontend(
        &self,
        folder_name: &str,
        is_local: bool,
        port: u16,
        folder_path: &str,
    ) -> Result<(), HostingError>;

    /// Stop `kind`; the returned label is the status the service settled on.
    async fn stop_hosting(&self, kind: ProcessKind) -> Result<StopResult, HostingError>;
}

/// Both hosting seams, as the lifecycle controller needs them.
pub trait HostingService: HostingStatusService + HostingControlService {}

impl<T> HostingService for T where T: HostingStatusService + HostingControlService {}
