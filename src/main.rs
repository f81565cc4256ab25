//! # Autoloader CLI
//!
//! This is the binary entry point for the `autoloader` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command and reporting top-level errors.
//!
//! The generation logic lives in the library crate; the binary is a thin
//! wrapper that stands in for a build tool's pre-compile hook.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
