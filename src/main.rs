// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use clap::Parser;

use anyhow::Result;

mod config;
mod error;
mod manifest;
mod scanner;

use crate::config::ScanConfig;

/// Model manifest generator
#[derive(Parser, Debug)]
#[command(name = "modelscan")]
#[command(about = "Collect model asset paths into a JSON manifest")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // The scan parameters are fixed; this is a one-shot batch tool.
    let config = ScanConfig::default();
    config.validate()?;

    if args.verbose {
        eprintln!(
            "Scanning {} for '*{}' under directories containing '{}'",
            config.root.display(),
            config.file_extension,
            config.path_substring
        );
    }

    let files = scanner::scan(
        &config.root,
        &config.path_substring,
        &config.file_extension,
    );

    if !args.quiet {
        println!("Found {} {} files", files.len(), config.file_extension);
    }

    manifest::write_manifest(&files, &config.output_path)?;

    if !args.quiet {
        println!("✓ Wrote manifest to {}", config.output_path.display());
    }

    Ok(())
}
