//! Generator configuration.
//!
//! # Examples
//!
//! ```
//! use uoa_core::GeneratorConfig;
//! use std::path::PathBuf;
//!
//! // Defaults reproduce a plain run in the current directory
//! let config = GeneratorConfig::default();
//! assert_eq!(config.output_dir, PathBuf::from("."));
//! assert!(config.table_path.is_none());
//!
//! let custom = GeneratorConfig {
//!     output_dir: PathBuf::from("cc-plugins"),
//!     dry_run: true,
//!     ..Default::default()
//! };
//! assert!(custom.dry_run);
//! ```

use crate::{Error, PluginTable, Result};
use std::path::PathBuf;

/// Name written into the "Generated using" notice of every output file.
///
/// Matches the notice of the checked-in descriptors so a plain run
/// reproduces them unchanged.
pub const DEFAULT_GENERATED_BY: &str =
    "empathy/ubuntu-online-accounts/cc-plugins/generate-plugins.py";

/// Checks a generator name before it is stamped into file headers.
///
/// The name ends up on a `#` comment line in Makefiles and inside an XML
/// comment, so it must be a single non-empty line without `--`.
///
/// # Errors
///
/// Returns `Error::ValidationError` for the `generated_by` field.
///
/// # Examples
///
/// ```
/// use uoa_core::validate_generated_by;
///
/// assert!(validate_generated_by("distro/regen.sh").is_ok());
/// assert!(validate_generated_by("a -- b").is_err());
/// ```
pub fn validate_generated_by(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name.contains(['\n', '\r']) {
        "must be a single line"
    } else if name.contains("--") {
        "must not contain '--'"
    } else {
        return Ok(());
    };

    Err(Error::ValidationError {
        field: "generated_by".to_string(),
        reason: reason.to_string(),
    })
}

/// Configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving `Makefile.am`, `providers/` and `services/`.
    ///
    /// Must exist before the run. Default: `.`
    pub output_dir: PathBuf,

    /// Optional TOML plugin table replacing the built-in one.
    ///
    /// Default: None (built-in table)
    pub table_path: Option<PathBuf>,

    /// Generator name stamped into file headers.
    ///
    /// Default: [`DEFAULT_GENERATED_BY`]
    pub generated_by: String,

    /// Render everything but skip writing to disk.
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Checks the fields that end up verbatim in generated files.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`validate_generated_by`].
    pub fn validate(&self) -> Result<()> {
        validate_generated_by(&self.generated_by)
    }

    /// Resolves the plugin table this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PluginTable::load`] when a table path is set.
    pub fn load_table(&self) -> Result<PluginTable> {
        match &self.table_path {
            Some(path) => PluginTable::load(path),
            None => Ok(PluginTable::builtin()),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            table_path: None,
            generated_by: DEFAULT_GENERATED_BY.to_string(),
            dry_run: false,
        }
    }
}
