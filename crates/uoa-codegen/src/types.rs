//! Types for generated output.
//!
//! # Examples
//!
//! ```
//! use uoa_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("providers/aim.provider", "<provider/>"));
//!
//! assert_eq!(code.file_count(), 1);
//! assert_eq!(code.get("providers/aim.provider").unwrap().content(), "<provider/>");
//! ```

use serde::{Deserialize, Serialize};

/// Result of a generator run: every file, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Generated files with relative paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a generated file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Appends every file of another container, keeping its order.
    pub fn extend(&mut self, other: Self) {
        self.files.extend(other.files);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a file by its relative path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Relative paths in generation order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(GeneratedFile::path).collect()
    }
}

/// A single generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the output directory, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_new() {
        let code = GeneratedCode::new();
        assert_eq!(code.file_count(), 0);
        assert_eq!(code, GeneratedCode::default());
    }

    #[test]
    fn test_add_and_lookup() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("Makefile.am", "SUBDIRS ="));
        code.add_file(GeneratedFile::new("services/Makefile.am", "services_DATA ="));

        assert_eq!(code.file_count(), 2);
        assert_eq!(code.paths(), ["Makefile.am", "services/Makefile.am"]);
        assert!(code.get("providers/Makefile.am").is_none());
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut first = GeneratedCode::new();
        first.add_file(GeneratedFile::new("a", ""));
        let mut second = GeneratedCode::new();
        second.add_file(GeneratedFile::new("b", ""));
        second.add_file(GeneratedFile::new("c", ""));

        first.extend(second);
        assert_eq!(first.paths(), ["a", "b", "c"]);
    }
}
