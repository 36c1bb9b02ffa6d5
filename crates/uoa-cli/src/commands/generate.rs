//! Generate command implementation.
//!
//! This command:
//! 1. Resolves the plugin table (built-in or `--table`)
//! 2. Renders `Makefile.am`, provider and service descriptors in memory
//! 3. Validates the resulting tree and writes it below the output directory
//!
//! With `--dry-run` the last step stops after validation.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use uoa_codegen::DescriptorGenerator;
use uoa_core::GeneratorConfig;
use uoa_core::cli::{ExitCode, OutputFormat};
use uoa_files::{FilesBuilder, expand_tilde};

/// Result of a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Directory the tree was (or would be) written to
    pub output_dir: String,
    /// Name stamped into file headers
    pub generated_by: String,
    /// Number of plugin records processed
    pub plugin_count: usize,
    /// Number of files produced
    pub file_count: usize,
    /// Whether writing was skipped
    pub dry_run: bool,
    /// Relative paths in generation order
    pub files: Vec<String>,
}

/// Renders and, unless `dry_run` is set, writes the full output tree.
///
/// # Errors
///
/// Returns an error if the generator name is unusable in file headers, if
/// the table cannot be loaded or is invalid, if rendering fails, or if any
/// file cannot be written. Write failures abort the run; files written
/// before the failure are left in place.
///
/// # Examples
///
/// ```
/// use uoa_cli::commands::generate::generate;
/// use uoa_core::GeneratorConfig;
///
/// let config = GeneratorConfig { dry_run: true, ..Default::default() };
/// let report = generate(&config)?;
///
/// assert_eq!(report.plugin_count, 14);
/// assert_eq!(report.file_count, 31);
/// assert_eq!(report.files[0], "Makefile.am");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    let table = config
        .load_table()
        .context("failed to load plugin table")?;
    info!("Loaded {} plugin records", table.len());

    let code = DescriptorGenerator::new()
        .context("failed to initialize templates")?
        .with_generated_by(config.generated_by.as_str())
        .generate(&table)
        .context("failed to render descriptors")?;

    let files: Vec<String> = code.paths().into_iter().map(String::from).collect();
    let output_dir = expand_tilde(&config.output_dir)
        .context("failed to resolve output directory")?;
    let builder = FilesBuilder::from_generated_code(code, "/");

    let tree = if config.dry_run {
        info!("Dry run, nothing written");
        builder.build()?
    } else {
        builder
            .build_and_export(&output_dir)
            .with_context(|| format!("failed to write into {}", output_dir.display()))?
    };

    info!(
        "Generated {} files into {}",
        tree.file_count(),
        output_dir.display()
    );

    Ok(GenerationReport {
        output_dir: output_dir.display().to_string(),
        generated_by: config.generated_by.clone(),
        plugin_count: table.len(),
        file_count: tree.file_count(),
        dry_run: config.dry_run,
        files,
    })
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns the errors of [`generate`] and output formatting errors.
pub fn run(config: &GeneratorConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let report = generate(config)?;
    println!("{}", format_output(&report, output_format)?);
    Ok(ExitCode::SUCCESS)
}
