mod error;
mod project_file;
mod rig_toml;

pub use error::*;
pub use project_file::*;
pub use rig_toml::*;
