use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, Result};
use crate::project::Project;

pub const PROJECT_FILE_NAME: &str = "rig-project.json";

/// Where the project file is: `explicit` when given, else
/// `rig-project.json` in the current directory.
pub fn project_file_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| ConfigError::FileRead(PathBuf::from("."), e))?;
    Ok(cwd.join(PROJECT_FILE_NAME))
}

pub fn load_project(path: &Path) -> Result<Project> {
    if !path.exists() {
        return Err(ConfigError::ProjectNotFound(path.to_path_buf()));
    }
    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::FileRead(path.to_path_buf(), e))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    let mut content = serde_json::to_string_pretty(project)?;
    content.push('\n');
    fs::write(path, content).map_err(|e| ConfigError::FileWrite(path.to_path_buf(), e))
}
