//! Command execution and runtime logic.
//!
//! Contains logging initialization, command dispatch and the mapping from
//! errors to process exit codes.

use anyhow::Result;
use clap::CommandFactory;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uoa_core::GeneratorConfig;
use uoa_core::cli::{ExitCode, OutputFormat};

use crate::cli::{Cli, Commands};
use crate::commands;

/// Initializes logging.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honored with
/// `warn` as fallback. Logs go to stderr, stdout carries command output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate(args) => {
            commands::generate::run(&GeneratorConfig::from(args), output_format)
        }
        Commands::List { table } => commands::list::run(table.as_deref(), output_format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}

/// Maps a command error to the process exit code.
///
/// Invalid plugin tables and arguments exit with
/// [`ExitCode::INVALID_INPUT`]; everything else, including write failures,
/// exits with [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use uoa_cli::runner::exit_code_for_error;
/// use uoa_core::cli::ExitCode;
///
/// let err = anyhow::Error::new(uoa_core::Error::EmptyTable);
/// assert_eq!(exit_code_for_error(&err), ExitCode::INVALID_INPUT);
///
/// let err = anyhow::anyhow!("disk full");
/// assert_eq!(exit_code_for_error(&err), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    let invalid_input = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<uoa_core::Error>())
        .any(uoa_core::Error::is_input_error);

    if invalid_input {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}
