//! Core types for the file tree: paths, entries, and errors.
//!
//! # Examples
//!
//! ```
//! use uoa_files::{FileEntry, FilePath};
//!
//! let path = FilePath::new("/services/irc-im.service").unwrap();
//! let file = FileEntry::new("<service/>");
//!
//! assert_eq!(path.as_str(), "/services/irc-im.service");
//! assert_eq!(file.content(), "<service/>");
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building or exporting a file tree.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Path is invalid or malformed
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// The invalid path
        path: String,
    },

    /// Path is not absolute (must start with '/')
    #[error("Path must be absolute: {path}")]
    PathNotAbsolute {
        /// The relative path
        path: String,
    },

    /// Path contains invalid components (e.g., '..')
    #[error("Path contains invalid components: {path}")]
    InvalidPathComponent {
        /// The path with invalid components
        path: String,
    },

    /// A filesystem operation (directory creation, open, write, rename)
    /// did not succeed.
    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        /// Disk path the operation targeted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` if this is an invalid path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_files::FilesError;
    ///
    /// let error = FilesError::PathNotAbsolute {
    ///     path: "providers/aim.provider".to_string(),
    /// };
    ///
    /// assert!(error.is_invalid_path());
    /// ```
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. }
                | Self::PathNotAbsolute { .. }
                | Self::InvalidPathComponent { .. }
        )
    }

    /// Returns `true` if a disk operation failed.
    #[must_use]
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure { .. })
    }

    pub(crate) fn write_failure(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type alias for file tree operations.
pub type Result<T> = std::result::Result<T, FilesError>;

/// A validated tree path.
///
/// Paths use Unix conventions on all platforms:
/// - Must start with '/'
/// - Free of parent directory references ('..')
/// - Forward slashes as separators, no empty segments
///
/// # Examples
///
/// ```
/// use uoa_files::FilePath;
///
/// assert!(FilePath::new("/Makefile.am").is_ok());
/// assert!(FilePath::new("relative/path").is_err());
/// assert!(FilePath::new("/providers/../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    /// Creates a new `FilePath`.
    ///
    /// A trailing slash is dropped so `/providers/` and `/providers` name
    /// the same directory.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidPath` if the path is empty, not UTF-8 or
    /// has empty segments, `FilesError::PathNotAbsolute` if it does not
    /// start with '/', and `FilesError::InvalidPathComponent` if it
    /// contains '..'.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| FilesError::InvalidPath {
            path: path.display().to_string(),
        })?;

        if path_str.is_empty() {
            return Err(FilesError::InvalidPath {
                path: String::new(),
            });
        }

        if !path_str.starts_with('/') {
            return Err(FilesError::PathNotAbsolute {
                path: path_str.to_string(),
            });
        }

        if path_str.split('/').any(|segment| segment == "..") {
            return Err(FilesError::InvalidPathComponent {
                path: path_str.to_string(),
            });
        }

        let normalized = match path_str.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if normalized.len() > 1 && normalized[1..].split('/').any(str::is_empty) {
            return Err(FilesError::InvalidPath {
                path: path_str.to_string(),
            });
        }

        Ok(Self(normalized.to_string()))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading '/'.
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.0[1..]
    }

    /// Returns the parent directory, or `None` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use uoa_files::FilePath;
    ///
    /// let path = FilePath::new("/services/sip-im.service").unwrap();
    /// assert_eq!(path.parent().unwrap().as_str(), "/services");
    /// assert_eq!(FilePath::new("/Makefile.am").unwrap().parent().unwrap().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0 == "/" {
            return None;
        }
        let idx = self.0.rfind('/')?;
        let parent = if idx == 0 { "/" } else { &self.0[..idx] };
        Some(Self(parent.to_string()))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content of a file in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    content: String,
}

impl FileEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the content size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
