use std::error::Error;
use std::path::Path;

use rig_core::ProcessKind;

use super::{display_state, kind_title, target_title};
use crate::hosting::{RunState, ToggleOutcome};
use crate::output;

pub async fn run(project_path: Option<&Path>, kind: ProcessKind) -> Result<(), Box<dyn Error>> {
    let (_, project) = super::load_project(project_path)?;
    let controller = super::connect(&project).await?;
    if output::is_verbose() {
        output::muted(&format!(
            "Using hosting service at {}",
            controller.services().socket_path().display()
        ));
    }

    // A failed operation is reported as the process state, not as a CLI error.
    match controller.toggle(kind, &project).await? {
        ToggleOutcome::NotConfigured => {
            output::warning(&format!(
                "No {} configured; nothing to toggle",
                target_title(kind).to_lowercase()
            ));
        }
        ToggleOutcome::Settled(RunState::Error(message)) => {
            output::error(&format!("{}: {}", kind_title(kind), message));
        }
        ToggleOutcome::Settled(state) => {
            output::success(&format!("{}: {}", kind_title(kind), display_state(&state)));
        }
    }
    Ok(())
}
