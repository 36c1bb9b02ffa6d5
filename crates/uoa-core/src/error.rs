//! Error types for the plugin descriptor generator.
//!
//! # Examples
//!
//! ```
//! use uoa_core::{Error, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ValidationError {
//!             field: "display_name".to_string(),
//!             reason: "cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_name("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use thiserror::Error;

/// Main error type for the generator core.
///
/// Filesystem write failures live in `uoa-files`; everything that can go
/// wrong before the first byte is written is represented here.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error for domain types.
    ///
    /// Raised when a protocol id or record field does not satisfy its
    /// format requirements.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Two records share the same protocol id.
    ///
    /// The protocol id names output files and build targets, so a duplicate
    /// would make one record silently overwrite another.
    #[error("Duplicate protocol id '{protocol_id}' (records {first} and {second})")]
    DuplicateProtocol {
        /// The repeated protocol id
        protocol_id: String,
        /// Zero-based index of the first occurrence
        first: usize,
        /// Zero-based index of the repeated occurrence
        second: usize,
    },

    /// The plugin table contains no records.
    #[error("Plugin table is empty")]
    EmptyTable,

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when a plugin table file cannot be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "protocol_id".to_string(),
    ///     reason: "Invalid characters".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a duplicate protocol id error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateProtocol { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "missing [[plugin]] table".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if the error stems from bad input rather than the
    /// generator itself (validation, duplicates, empty table, config).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::TemplateError { .. })
    }
}

/// Result type alias for generator core operations.
pub type Result<T> = std::result::Result<T, Error>;
