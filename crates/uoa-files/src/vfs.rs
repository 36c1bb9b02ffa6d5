//! In-memory file tree.
//!
//! Files are kept in a `BTreeMap` so iteration and export order are the
//! same on every run.
//!
//! # Examples
//!
//! ```
//! use uoa_files::FileSystem;
//!
//! let mut tree = FileSystem::new();
//! tree.add_file("/Makefile.am", "SUBDIRS = providers services\n").unwrap();
//!
//! assert!(tree.exists("/Makefile.am"));
//! assert_eq!(tree.total_size(), 29);
//! ```

use crate::types::{FileEntry, FilePath, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// An in-memory tree of generated files.
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    files: BTreeMap<FilePath, FileEntry>,
}

impl FileSystem {
    /// Creates a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Adds a file, replacing any file already at that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid (not absolute, contains '..', etc.).
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let path = FilePath::new(path)?;
        self.files.insert(path, FileEntry::new(content));
        Ok(())
    }

    /// Checks if a file exists at the given path.
    ///
    /// Returns `false` if the path is invalid.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        FilePath::new(path)
            .ok()
            .is_some_and(|p| self.files.contains_key(&p))
    }

    /// Returns the number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns all file paths in sorted order.
    pub fn all_paths(&self) -> impl Iterator<Item = &FilePath> {
        self.files.keys()
    }

    /// Returns all files in sorted path order.
    pub fn files(&self) -> impl Iterator<Item = (&FilePath, &FileEntry)> {
        self.files.iter()
    }

    /// Total content size in bytes.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.files.values().map(FileEntry::size).sum()
    }
}
