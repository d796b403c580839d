use std::error::Error;
use std::path::Path;

use rig_core::ProcessKind;

use super::{display_state, kind_title, target_title};
use crate::hosting::{RunState, toggle_label};
use crate::output;
use crate::project::Project;

pub async fn run(project_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let (_, project) = super::load_project(project_path)?;
    let controller = super::connect(&project).await?;
    let snapshot = controller.snapshot();

    output::section(project_title(&project));
    output::field("Extension types", &project.manifest.extension_types_label());
    for kind in ProcessKind::ALL {
        output::field(target_title(kind), project.hosting_target(kind));
        output::field(
            kind_title(kind),
            &describe(kind, &project, &snapshot.get(kind).run_state),
        );
    }
    Ok(())
}

fn project_title(project: &Project) -> &str {
    match project.name() {
        "" => "(unnamed project)",
        name => name,
    }
}

fn describe(kind: ProcessKind, project: &Project, state: &RunState) -> String {
    if !project.is_configured(kind) {
        return String::new();
    }
    format!(
        "{}  [{} with `rig host {}`]",
        display_state(state),
        toggle_label(kind, state),
        kind
    )
}
