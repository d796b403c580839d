use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_SOCKET_NAME: &str = "hosting.sock";

/// Global configuration from `{rig_home}/config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RigToml {
    /// [hosting] section - how to reach the local hosting service
    #[serde(default)]
    pub hosting: HostingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostingSection {
    /// Control socket path (defaults to `{rig_home}/hosting.sock`)
    pub socket: Option<PathBuf>,

    /// Upper bound for one request to the hosting service, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for HostingSection {
    fn default() -> Self {
        Self {
            socket: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl RigToml {
    /// Load `config.toml` from the rig home directory. A missing file means defaults.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(path.as_ref().to_path_buf(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RigToml = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.hosting.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "hosting.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if let Some(socket) = &self.hosting.socket
            && socket.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "hosting.socket must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Control socket path; relative paths are taken from `home`.
    pub fn hosting_socket(&self, home: &Path) -> PathBuf {
        match &self.hosting.socket {
            Some(socket) if socket.is_absolute() => socket.clone(),
            Some(socket) => home.join(socket),
            None => home.join(DEFAULT_SOCKET_NAME),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.hosting.request_timeout_secs)
    }
}
