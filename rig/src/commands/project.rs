use std::error::Error;
use std::path::Path;

use clap::Subcommand;

use crate::config;
use crate::output;
use crate::project::{Project, PropertyEditor};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show project properties
    Show,

    /// Change a project property
    Set {
        /// Property name: name, frontendFolderName, backendCommand or projectFolderPath
        field: String,

        /// New value (may be empty)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

pub fn run(project_path: Option<&Path>, cmd: ProjectCommands) -> Result<(), Box<dyn Error>> {
    match cmd {
        ProjectCommands::Show => show(project_path),
        ProjectCommands::Set { field, value } => set(project_path, &field, &value),
    }
}

fn show(project_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let (path, project) = super::load_project(project_path)?;
    output::section("Project");
    output::field("Project name", project.name());
    output::field("Front-end files location", &project.frontend_folder_name);
    output::field("Back-end run command", &project.backend_command);
    output::field("Project folder", &project.project_folder_path);
    output::field("Extension types", &project.manifest.extension_types_label());
    output::field("Local extension", if project.is_local { "yes" } else { "no" });
    output::muted(&format!("  {}", path.display()));
    Ok(())
}

fn set(project_path: Option<&Path>, field: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let (path, project) = super::load_project(project_path)?;

    let mut updated: Option<Project> = None;
    let mut editor = PropertyEditor::new(|update| {
        let base = updated.as_ref().unwrap_or(&project);
        updated = Some(base.apply(update));
    });
    editor.change(&project, field, value)?;

    let Some(updated) = updated else {
        output::warning("The name of an online extension can only be changed online");
        return Ok(());
    };

    config::save_project(&path, &updated)?;
    output::success(&format!("Updated {} in {}", field, path.display()));
    Ok(())
}
