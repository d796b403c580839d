use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use rig_core::ProcessKind;

use crate::commands::{self, project};

/// rig - Host and manage extension projects locally
#[derive(Parser)]
#[command(name = "rig")]
#[command(version, disable_version_flag = true)]
#[command(about = "rig - Host and manage extension projects locally")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show version
    #[arg(long, global = true)]
    pub version: bool,

    /// Show verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Project file (defaults to ./rig-project.json)
    #[arg(long, global = true, value_name = "FILE", env = "RIG_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show front-end and back-end hosting status for the project
    Status,

    /// Start the process if it is not running, stop it if it is
    #[command(visible_alias = "toggle")]
    Host {
        /// Which process to toggle
        #[arg(value_parser = ["frontend", "backend"])]
        kind: String,
    },

    /// Project property commands
    #[command(subcommand)]
    Project(project::ProjectCommands),
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        if self.version {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        let Some(command) = self.command else {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        };

        let project_path = self.project.as_deref();
        match command {
            Commands::Status => {
                let rt = tokio::runtime::Runtime::new()?;
                rt.block_on(commands::status::run(project_path))
            }
            Commands::Host { kind } => {
                let kind: ProcessKind = kind.parse()?;
                let rt = tokio::runtime::Runtime::new()?;
                rt.block_on(commands::host::run(project_path, kind))
            }
            Commands::Project(cmd) => project::run(project_path, cmd),
        }
    }
}
