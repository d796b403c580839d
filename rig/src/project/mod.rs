//! Extension project model
//!
//! A project is the developer's local view of an extension: where its files
//! live, how its back-end is started, which folder holds the front-end, and
//! the extension manifest describing its views.

mod manifest;
mod update;

pub use manifest::{ExtensionView, ExtensionViews, Manifest, ViewType};
pub use update::{ProjectError, ProjectField, ProjectUpdate, PropertyEditor};

use rig_core::ProcessKind;
use serde::{Deserialize, Serialize};

/// A project record as stored in `rig-project.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project folder; the back-end command runs here and the front-end
    /// folder is resolved relative to it. Empty when the project has none.
    #[serde(default)]
    pub project_folder_path: String,

    /// Command used to run the back-end. Empty means no back-end.
    #[serde(default)]
    pub backend_command: String,

    /// Front-end files location. Empty means nothing to host.
    #[serde(default)]
    pub frontend_folder_name: String,

    /// Whether the extension was created locally rather than pulled from an
    /// online extension record.
    #[serde(default)]
    pub is_local: bool,

    #[serde(default)]
    pub manifest: Manifest,

    /// Fields owned by other tools (secrets, ids, ...) kept as-is on save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Project {
    /// Display name of the project, taken from the manifest.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// The configuration value that makes `kind` hostable: the back-end
    /// command or the front-end folder. Empty when not configured.
    pub fn hosting_target(&self, kind: ProcessKind) -> &str {
        match kind {
            ProcessKind::Backend => &self.backend_command,
            ProcessKind::Frontend => &self.frontend_folder_name,
        }
    }

    pub fn is_configured(&self, kind: ProcessKind) -> bool {
        !self.hosting_target(kind).is_empty()
    }
}
