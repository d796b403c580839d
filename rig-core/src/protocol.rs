//! Hosting service protocol types for control socket communication
//!
//! One `Command` is written per connection as a JSON line, and the service
//! answers with exactly one `Response` line.

use serde::{Deserialize, Serialize};

use crate::ProcessKind;

/// Commands that can be sent to the hosting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Report which processes are running for the active project
    Status,

    /// Run the back-end command with `folder_path` as its working directory
    StartBackend {
        command: String,
        folder_path: String,
    },

    /// Serve the front-end files on `port`
    StartFrontend {
        /// Front-end files location, relative to `folder_path` when that is set.
        folder_name: String,
        is_local: bool,
        port: u16,
        folder_path: String,
    },

    /// Stop one hosted process
    Stop { kind: ProcessKind },
}

/// Response from the hosting service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// Command succeeded
    Ok {
        #[serde(default)]
        data: serde_json::Value,
    },

    /// Command failed
    Error { message: String },
}

impl Response {
    pub fn ok(data: impl Serialize) -> Self {
        Self::Ok {
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
