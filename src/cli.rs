//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

/// Autoloader - Generate runtime config and package manifest before a build
#[derive(Parser, Debug)]
#[command(name = "autoloader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Settings file (defaults to autoloader.yaml in the project root)
    #[arg(long, global = true, value_name = "PATH", env = "AUTOLOADER_SETTINGS")]
    settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the config and manifest modules for a project
    Generate(commands::generate::GenerateArgs),

    /// Print a generated module without writing it
    Show(commands::show::ShowArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let settings = self.settings.as_deref();
        match self.command {
            Commands::Generate(args) => commands::generate::execute(args, settings),
            Commands::Show(args) => commands::show::execute(args, settings),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Install `env_logger`, using `RUST_LOG` when set and `level` otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}
