//! Show command implementation
//!
//! Prints a generated module to stdout exactly as `generate` would write it.
//! Nothing is written and no cache is involved.

use anyhow::Result;
use autoloader::defaults::DEFAULT_ENVIRONMENT;
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// Which generated module to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModuleKind {
    /// The merged configuration module
    Config,
    /// The package manifest module
    Manifest,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Module to print
    #[arg(value_enum)]
    pub module: ModuleKind,

    /// Project root containing the source tree
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Deployment environment selecting the config block
    #[arg(short, long, value_name = "NAME", env = "AUTOLOADER_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,
}

/// Render the requested module.
pub fn render(args: &ShowArgs, settings: Option<&Path>) -> Result<String> {
    let generator = super::load_generator(&args.root, &args.env, settings)?;
    let module = match args.module {
        ModuleKind::Config => generator.render_config()?,
        ModuleKind::Manifest => generator.render_manifest()?,
    };
    Ok(module)
}

/// Execute the show command
pub fn execute(args: ShowArgs, settings: Option<&Path>) -> Result<()> {
    println!("{}", render(&args, settings)?);
    Ok(())
}
