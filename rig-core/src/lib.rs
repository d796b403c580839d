//! Rig Core - Shared hosting protocol types
//!
//! This crate contains the types shared between the rig CLI (`rig`) and the
//! local hosting service it drives over a Unix socket: which process a request
//! is about, what the service reports as running, and what a stop produced.
//!
//! Project handling, port resolution and the lifecycle controller live in the
//! `rig` crate.

mod protocol;

pub use protocol::*;
use serde::{Deserialize, Serialize};

/// The two processes the hosting service can run for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    Backend,
    Frontend,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 2] = [ProcessKind::Backend, ProcessKind::Frontend];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Backend => "backend",
            ProcessKind::Frontend => "frontend",
        }
    }
}

impl std::fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProcessKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" | "back-end" => Ok(ProcessKind::Backend),
            "frontend" | "front-end" => Ok(ProcessKind::Frontend),
            other => Err(format!("unknown process kind '{other}'")),
        }
    }
}

/// What the hosting service reports as currently running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingStatus {
    pub backend_running: bool,
    pub frontend_running: bool,
}

impl HostingStatus {
    pub fn is_running(&self, kind: ProcessKind) -> bool {
        match kind {
            ProcessKind::Backend => self.backend_running,
            ProcessKind::Frontend => self.frontend_running,
        }
    }
}

/// Outcome of stopping one process.
///
/// `label` is the status the service decided on (e.g. `"not running"` or
/// `"exited"`); it always belongs to `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopResult {
    pub kind: ProcessKind,
    pub label: String,
}
