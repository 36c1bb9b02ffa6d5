//! CLI argument definitions and parsing.
//!
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use uoa_core::{DEFAULT_GENERATED_BY, GeneratorConfig, validate_generated_by};

/// Generates the automake manifest and account descriptors for the
/// online-accounts plugin set.
#[derive(Parser, Debug)]
#[command(name = "uoa-plugin-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write `Makefile.am`, provider and service descriptors.
    ///
    /// Without options this regenerates the built-in plugin set into the
    /// current directory, creating `providers/` and `services/` as needed.
    ///
    /// # Examples
    ///
    /// ```bash
    /// uoa-plugin-gen generate
    /// uoa-plugin-gen generate --output cc-plugins --table plugins.toml
    /// uoa-plugin-gen generate --dry-run --format json
    /// ```
    Generate(GenerateArgs),

    /// Print the effective plugin table.
    List {
        /// TOML plugin table replacing the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// uoa-plugin-gen completions bash > /etc/bash_completion.d/uoa-plugin-gen
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options of the `generate` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Directory receiving the generated tree (must exist)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// TOML plugin table replacing the built-in one
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Name stamped into the "Generated using" header
    #[arg(long, default_value = DEFAULT_GENERATED_BY, value_parser = parse_generated_by)]
    pub generated_by: String,

    /// Render and report without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_generated_by(value: &str) -> Result<String, String> {
    validate_generated_by(value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            output_dir: args.output,
            table_path: args.table,
            generated_by: args.generated_by,
            dry_run: args.dry_run,
        }
    }
}
