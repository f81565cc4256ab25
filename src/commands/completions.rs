//! Completions command implementation
//!
//! Prints a `clap_complete` script for the `autoloader` command tree, or
//! installs it at `--output` with the same atomic write the generated
//! modules use, so a shell never sources a half-written script.
//!
//! ```bash
//! autoloader completions bash > ~/.local/share/bash-completion/completions/autoloader
//! autoloader completions zsh --output ~/.zfunc/_autoloader
//! ```

use anyhow::{Context, Result};
use autoloader::write::write_atomic;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::Cli;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Render the completion script for `shell`.
pub fn render(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, &mut cmd, name, &mut script);
    String::from_utf8(script).context("Completion script is not valid UTF-8")
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let script = render(args.shell)?;

    match args.output {
        Some(path) => {
            write_atomic(&path, &script)?;
            log::info!("Wrote {} completions to {}", args.shell, path.display());
        }
        None => io::stdout()
            .write_all(script.as_bytes())
            .context("Failed to write completions to stdout")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_covers_subcommands() {
        let script = render(Shell::Bash).unwrap();
        assert!(script.contains("autoloader"));
        for subcommand in ["generate", "show", "completions"] {
            assert!(script.contains(subcommand), "missing {}", subcommand);
        }
    }

    #[test]
    fn test_render_fish_lists_generate_options() {
        let script = render(Shell::Fish).unwrap();
        assert!(script.contains("complete -c autoloader"));
        assert!(script.contains("-l passes"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("completions/_autoloader");

        execute(CompletionsArgs {
            shell: Shell::Zsh,
            output: Some(path.clone()),
        })
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(Shell::Zsh).unwrap());
        assert!(written.starts_with("#compdef autoloader"));
    }
}
