//! List command implementation.
//!
//! Prints the effective plugin table together with the file names each
//! record produces.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uoa_core::cli::{ExitCode, OutputFormat};
use uoa_core::{PluginRecord, PluginTable};

/// The effective plugin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableListing {
    /// `builtin` or the path of the table file
    pub source: String,
    /// Records in table order
    pub plugins: Vec<PluginSummary>,
}

/// One record and its derived names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSummary {
    /// Display name
    pub name: String,
    /// Telepathy connection manager
    pub manager: String,
    /// Protocol id
    pub protocol: String,
    /// Icon name
    pub icon: String,
    /// Automake target prefix
    pub target: String,
    /// Provider descriptor file name
    pub provider_file: String,
    /// Service descriptor file name
    pub service_file: String,
}

impl From<&PluginRecord> for PluginSummary {
    fn from(record: &PluginRecord) -> Self {
        let id = record.protocol_id();
        Self {
            name: record.display_name().to_string(),
            manager: record.connection_manager().to_string(),
            protocol: id.to_string(),
            icon: record.icon_name().to_string(),
            target: id.target_name(),
            provider_file: id.provider_file_name(),
            service_file: id.service_file_name(),
        }
    }
}

/// Resolves the table named by `table_path`, or the built-in one.
///
/// # Errors
///
/// Returns an error if the table file cannot be read or is invalid.
///
/// # Examples
///
/// ```
/// use uoa_cli::commands::list::list;
///
/// let listing = list(None)?;
/// assert_eq!(listing.source, "builtin");
/// assert_eq!(listing.plugins.len(), 14);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list(table_path: Option<&Path>) -> Result<TableListing> {
    let (source, table) = match table_path {
        Some(path) => (
            path.display().to_string(),
            PluginTable::load(path).context("failed to load plugin table")?,
        ),
        None => ("builtin".to_string(), PluginTable::builtin()),
    };
    info!("Listing {} plugin records from {source}", table.len());

    Ok(TableListing {
        source,
        plugins: table.iter().map(PluginSummary::from).collect(),
    })
}

/// Runs the list command.
///
/// # Errors
///
/// Returns the errors of [`list`] and output formatting errors.
pub fn run(table_path: Option<&Path>, output_format: OutputFormat) -> Result<ExitCode> {
    let listing = list(table_path)?;
    println!("{}", format_output(&listing, output_format)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_listing() {
        let listing = list(None).unwrap();
        let salut = listing
            .plugins
            .iter()
            .find(|p| p.name == "Salut")
            .unwrap();

        assert_eq!(salut.manager, "salut");
        assert_eq!(salut.protocol, "local-xmpp");
        assert_eq!(salut.target, "liblocal_xmpp_la");
        assert_eq!(salut.provider_file, "local-xmpp.provider");
        assert_eq!(salut.service_file, "local-xmpp-im.service");
    }

    #[test]
    fn test_listing_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[plugin]]\nname = \"IRC\"\nmanager = \"idle\"\nprotocol = \"irc\"\nicon = \"irc\""
        )
        .unwrap();

        let listing = list(Some(file.path())).unwrap();
        assert_eq!(listing.source, file.path().display().to_string());
        assert_eq!(listing.plugins.len(), 1);
        assert_eq!(listing.plugins[0].service_file, "irc-im.service");
    }

    #[test]
    fn test_invalid_file_is_input_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[plugin]]\nname = \"X\"").unwrap();

        let err = list(Some(file.path())).unwrap_err();
        assert!(err.downcast_ref::<uoa_core::Error>().unwrap().is_input_error());
    }
}
