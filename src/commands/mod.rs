//! # CLI Command Implementations
//!
//! Each subcommand of the `autoloader` tool lives in its own file with an
//! `Args` struct derived using `clap` and an `execute` function that calls
//! into the `autoloader` library.

pub mod completions;
pub mod generate;
pub mod show;

use anyhow::{Context, Result};
use autoloader::generator::Generator;
use autoloader::settings::GeneratorSettings;
use std::path::Path;

/// Resolve settings for `root` and create a generator with empty caches.
pub(crate) fn load_generator(
    root: &Path,
    environment: &str,
    settings_path: Option<&Path>,
) -> Result<Generator> {
    if !root.is_dir() {
        anyhow::bail!("Project root not found: {}", root.display());
    }

    let settings = GeneratorSettings::load(root, settings_path)
        .with_context(|| format!("Failed to load settings for {}", root.display()))?;
    Ok(Generator::new(root, environment, settings))
}
