//! Project property editing
//!
//! The editor turns a form-style `(field, value)` change into a typed
//! [`ProjectUpdate`] and hands it to whoever owns the project. Merging and
//! persisting is the owner's job, via [`Project::apply`].

use thiserror::Error;

use super::Project;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Unknown project field '{0}'")]
    UnknownField(String),
}

/// Editable project fields, keyed by their form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    FrontendFolderName,
    BackendCommand,
    ProjectFolderPath,
}

impl ProjectField {
    pub const ALL: [ProjectField; 4] = [
        ProjectField::Name,
        ProjectField::FrontendFolderName,
        ProjectField::BackendCommand,
        ProjectField::ProjectFolderPath,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::FrontendFolderName => "frontendFolderName",
            ProjectField::BackendCommand => "backendCommand",
            ProjectField::ProjectFolderPath => "projectFolderPath",
        }
    }
}

impl std::str::FromStr for ProjectField {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProjectField::Name),
            "frontendFolderName" | "frontend-folder" | "frontend_folder_name" => {
                Ok(ProjectField::FrontendFolderName)
            }
            "backendCommand" | "backend-command" | "backend_command" => {
                Ok(ProjectField::BackendCommand)
            }
            "projectFolderPath" | "project-folder" | "project_folder_path" => {
                Ok(ProjectField::ProjectFolderPath)
            }
            other => Err(ProjectError::UnknownField(other.to_string())),
        }
    }
}

/// A single change to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectUpdate {
    /// Rename the project. Only the manifest name changes.
    RenameProject(String),
    SetFrontendFolder(String),
    SetBackendCommand(String),
    SetProjectFolder(String),
}

impl ProjectUpdate {
    pub fn field(&self) -> ProjectField {
        match self {
            ProjectUpdate::RenameProject(_) => ProjectField::Name,
            ProjectUpdate::SetFrontendFolder(_) => ProjectField::FrontendFolderName,
            ProjectUpdate::SetBackendCommand(_) => ProjectField::BackendCommand,
            ProjectUpdate::SetProjectFolder(_) => ProjectField::ProjectFolderPath,
        }
    }
}

impl Project {
    /// Return a copy of this project with `update` merged in.
    pub fn apply(&self, update: ProjectUpdate) -> Project {
        let mut next = self.clone();
        match update {
            ProjectUpdate::RenameProject(name) => next.manifest.name = name,
            ProjectUpdate::SetFrontendFolder(folder) => next.frontend_folder_name = folder,
            ProjectUpdate::SetBackendCommand(command) => next.backend_command = command,
            ProjectUpdate::SetProjectFolder(path) => next.project_folder_path = path,
        }
        next
    }
}

/// Forwards field edits upward as [`ProjectUpdate`]s.
pub struct PropertyEditor<F>
where
    F: FnMut(ProjectUpdate),
{
    on_change: F,
}

impl<F> PropertyEditor<F>
where
    F: FnMut(ProjectUpdate),
{
    pub fn new(on_change: F) -> Self {
        Self { on_change }
    }

    /// Handle an edit of `field` on `project`.
    ///
    /// Returns whether an update was forwarded: renames of projects that are
    /// not local are dropped, since their name belongs to the online record.
    pub fn change(
        &mut self,
        project: &Project,
        field: &str,
        value: &str,
    ) -> Result<bool, ProjectError> {
        let value = value.to_string();
        let update = match field.parse::<ProjectField>()? {
            ProjectField::Name => {
                if !project.is_local {
                    tracing::debug!(field, "ignoring rename of non-local project");
                    return Ok(false);
                }
                ProjectUpdate::RenameProject(value)
            }
            ProjectField::FrontendFolderName => ProjectUpdate::SetFrontendFolder(value),
            ProjectField::BackendCommand => ProjectUpdate::SetBackendCommand(value),
            ProjectField::ProjectFolderPath => ProjectUpdate::SetProjectFolder(value),
        };
        (self.on_change)(update);
        Ok(true)
    }
}
