//! `uoa-plugin-gen`: build-file and descriptor generator for the
//! online-accounts plugin set.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate the built-in plugin set in the current directory
//! uoa-plugin-gen generate
//!
//! # Inspect what would be written
//! uoa-plugin-gen generate --dry-run --format json
//!
//! # Show the effective table
//! uoa-plugin-gen list --table plugins.toml
//! ```

use anyhow::Result;
use clap::Parser;
use uoa_cli::cli::Cli;
use uoa_cli::runner::{execute_command, exit_code_for_error, init_logging};
use uoa_core::cli::{ExitCode, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for_error(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose)?;

    let output_format = cli.format.parse::<OutputFormat>()?;

    execute_command(cli.command, output_format)
}
