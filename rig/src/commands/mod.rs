pub mod host;
pub mod project;
pub mod status;

use std::error::Error;
use std::path::{Path, PathBuf};

use rig_core::ProcessKind;

use crate::config::{self, RigToml};
use crate::hosting::{LifecycleController, RunState, SocketHostingClient};
use crate::paths;
use crate::project::Project;

pub(crate) fn load_project(
    explicit: Option<&Path>,
) -> Result<(PathBuf, Project), Box<dyn Error>> {
    let path = config::project_file_path(explicit)?;
    let project = config::load_project(&path)?;
    tracing::debug!(path = %path.display(), "loaded project");
    Ok((path, project))
}

pub(crate) fn hosting_client() -> Result<SocketHostingClient, Box<dyn Error>> {
    let home = paths::rig_home_dir()?;
    let config = RigToml::load_from_dir(&home)?;
    Ok(SocketHostingClient::new(
        config.hosting_socket(&home),
        config.request_timeout(),
    ))
}

pub(crate) async fn connect(
    project: &Project,
) -> Result<LifecycleController<SocketHostingClient>, Box<dyn Error>> {
    let client = hosting_client()?;
    Ok(LifecycleController::connect(client, project).await)
}

pub(crate) fn kind_title(kind: ProcessKind) -> &'static str {
    match kind {
        ProcessKind::Backend => "Back-end",
        ProcessKind::Frontend => "Front-end",
    }
}

pub(crate) fn target_title(kind: ProcessKind) -> &'static str {
    match kind {
        ProcessKind::Backend => "Back-end run command",
        ProcessKind::Frontend => "Front-end files location",
    }
}

pub(crate) fn display_state(state: &RunState) -> &str {
    match state.label() {
        "" => "-",
        label => label,
    }
}
