//! Fluent construction of file trees.
//!
//! # Examples
//!
//! ```
//! use uoa_files::FilesBuilder;
//!
//! let tree = FilesBuilder::new()
//!     .add_file("/providers/irc.provider", "<provider id=\"irc\"/>")
//!     .add_file("/services/irc-im.service", "<service id=\"irc-im\"/>")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tree.file_count(), 2);
//! ```

use crate::types::{FilesError, Result};
use crate::vfs::FileSystem;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uoa_codegen::GeneratedCode;

/// Builder for a [`FileSystem`].
///
/// Invalid paths do not abort the chain; they are collected and the first
/// one is reported by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use uoa_files::FilesBuilder;
/// use uoa_codegen::{GeneratedCode, GeneratedFile};
///
/// let mut code = GeneratedCode::new();
/// code.add_file(GeneratedFile::new("Makefile.am", "SUBDIRS = providers services\n"));
///
/// let tree = FilesBuilder::from_generated_code(code, "/")
///     .build()
///     .unwrap();
///
/// assert!(tree.exists("/Makefile.am"));
/// ```
#[derive(Debug, Default)]
pub struct FilesBuilder {
    vfs: FileSystem,
    errors: Vec<FilesError>,
}

impl FilesBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vfs: FileSystem::new(),
            errors: Vec::new(),
        }
    }

    /// Creates a builder holding every file of `code` below `base_path`.
    ///
    /// Generated paths are relative (`providers/aim.provider`); they are
    /// joined with forward slashes so tree paths stay Unix-style on every
    /// platform.
    #[must_use]
    pub fn from_generated_code(code: GeneratedCode, base_path: impl AsRef<Path>) -> Self {
        let base = base_path.as_ref().to_string_lossy();
        let base = if base.ends_with('/') {
            base.into_owned()
        } else {
            format!("{base}/")
        };

        code.files.into_iter().fold(Self::new(), |builder, file| {
            builder.add_file(format!("{base}{}", file.path), file.content)
        })
    }

    /// Adds a file to the tree being built.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Err(e) = self.vfs.add_file(path, content) {
            self.errors.push(e);
        }
        self
    }

    /// Builds the tree and writes it below `base_path`.
    ///
    /// A leading `~` in `base_path` is expanded to the home directory. The
    /// directory itself must exist.
    ///
    /// # Errors
    ///
    /// Returns the first path error collected while building, an error if
    /// the home directory cannot be determined, or
    /// `FilesError::WriteFailure` if export fails.
    pub fn build_and_export(self, base_path: impl AsRef<Path>) -> Result<FileSystem> {
        let vfs = self.build()?;
        let base = expand_tilde(base_path.as_ref())?;

        debug!(
            "Exporting {} files ({} bytes) to {}",
            vfs.file_count(),
            vfs.total_size(),
            base.display()
        );
        vfs.export_to_filesystem(&base)?;

        Ok(vfs)
    }

    /// Consumes the builder and returns the tree.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while adding files.
    ///
    /// ```
    /// use uoa_files::FilesBuilder;
    ///
    /// let result = FilesBuilder::new()
    ///     .add_file("providers/aim.provider", "relative paths are rejected")
    ///     .build();
    ///
    /// assert!(result.is_err());
    /// ```
    pub fn build(self) -> Result<FileSystem> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(self.vfs)
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Other paths are returned unchanged.
///
/// # Errors
///
/// Returns `FilesError::InvalidPath` for non UTF-8 paths and
/// `FilesError::WriteFailure` if the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use uoa_files::expand_tilde;
///
/// assert_eq!(expand_tilde(Path::new("out/plugins")).unwrap(), Path::new("out/plugins"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| FilesError::InvalidPath {
        path: path.display().to_string(),
    })?;

    let rest = match path_str {
        "~" => "",
        s => match s.strip_prefix("~/") {
            Some(rest) => rest,
            None => return Ok(path.to_path_buf()),
        },
    };

    let home = dirs::home_dir().ok_or_else(|| {
        FilesError::write_failure(
            path,
            io::Error::new(io::ErrorKind::NotFound, "cannot determine home directory"),
        )
    })?;

    Ok(if rest.is_empty() { home } else { home.join(rest) })
}
