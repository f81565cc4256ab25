//! Generate command implementation
//!
//! Fires the pre-build event on one generator instance: the config module and
//! the package manifest are regenerated and written when their content
//! changed. With `--passes N` the event fires N times on the same instance,
//! which mirrors a watch-mode build and exercises the write-skip cache.

use anyhow::Result;
use autoloader::defaults::DEFAULT_ENVIRONMENT;
use autoloader::generator::{PassOutcome, PassReport};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project root containing the source tree
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Deployment environment selecting the config block
    #[arg(short, long, value_name = "NAME", env = "AUTOLOADER_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Show what would be written without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Number of pre-build events to run on the same generator
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub passes: u32,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, settings: Option<&Path>) -> Result<()> {
    let mut generator =
        super::load_generator(&args.root, &args.env, settings)?.with_dry_run(args.dry_run);

    if !args.quiet {
        if args.dry_run {
            println!("DRY RUN MODE - No changes will be made");
        }
        println!(
            "Generating for environment '{}' in {}",
            generator.environment(),
            generator.source_root().display()
        );
    }

    for pass in 1..=args.passes {
        let report = generator.before_compile()?;
        if !args.quiet {
            print_report(pass, &report, args.dry_run);
        }
    }

    Ok(())
}

fn print_report(pass: u32, report: &PassReport, dry_run: bool) {
    println!("Pass {}:", pass);
    for outcome in [&report.config, &report.manifest] {
        println!("  {}", describe(outcome, dry_run));
    }
}

fn describe(outcome: &PassOutcome, dry_run: bool) -> String {
    let path = outcome.path().display();
    match outcome {
        PassOutcome::Written { bytes, .. } if dry_run => {
            format!("would write {} ({} bytes)", path, bytes)
        }
        PassOutcome::Written { bytes, .. } => format!("wrote {} ({} bytes)", path, bytes),
        PassOutcome::Unchanged { .. } => format!("unchanged {}", path),
    }
}
