//! Export of a file tree to the real filesystem.
//!
//! Export is sequential and stops at the first failure. Files written
//! before the failure stay on disk; re-running the generator overwrites
//! them.
//!
//! # Examples
//!
//! ```
//! use uoa_files::FilesBuilder;
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! # let output_dir = temp_dir.path();
//! let tree = FilesBuilder::new()
//!     .add_file("/providers/aim.provider", "<provider id=\"aim\"/>")
//!     .add_file("/services/aim-im.service", "<service id=\"aim-im\"/>")
//!     .build()
//!     .unwrap();
//!
//! tree.export_to_filesystem(output_dir).unwrap();
//!
//! assert!(output_dir.join("providers/aim.provider").exists());
//! ```

use crate::types::{FilePath, FilesError, Result};
use crate::vfs::FileSystem;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for filesystem export operations.
///
/// # Examples
///
/// ```
/// use uoa_files::ExportOptions;
///
/// let options = ExportOptions::default().with_atomic_writes(false);
/// assert!(!options.atomic);
/// ```
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
}

impl ExportOptions {
    /// Creates new export options with atomic writes enabled.
    ///
    /// Existing files are always replaced; every run fully regenerates
    /// its output.
    #[must_use]
    pub const fn new() -> Self {
        Self { atomic: true }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// Exports the tree under `base_path` with default options.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::WriteFailure` if the base directory is missing,
    /// a directory cannot be created, or a file cannot be written.
    pub fn export_to_filesystem(&self, base_path: impl AsRef<Path>) -> Result<()> {
        self.export_to_filesystem_with_options(base_path, &ExportOptions::default())
    }

    /// Exports the tree under `base_path` with custom options.
    ///
    /// The base directory must already exist; directories inside the tree
    /// are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::WriteFailure` on the first failing filesystem
    /// operation. Nothing after that point is written.
    pub fn export_to_filesystem_with_options(
        &self,
        base_path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<()> {
        let base = base_path.as_ref();

        if !base.is_dir() {
            return Err(FilesError::write_failure(
                base,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "output directory does not exist or is not a directory",
                ),
            ));
        }

        let dirs = self.collect_directories(base);
        for dir in &dirs {
            fs::create_dir_all(dir).map_err(|e| FilesError::write_failure(dir, e))?;
        }

        for (path, file) in self.files() {
            let disk_path = disk_path(base, path);
            write_file(&disk_path, file.content(), options)?;
            debug!("Wrote {}", disk_path.display());
        }

        Ok(())
    }

    /// Collects every directory that has to exist below `base`.
    fn collect_directories(&self, base: &Path) -> BTreeSet<PathBuf> {
        self.all_paths()
            .filter_map(FilePath::parent)
            .filter(|parent| parent.as_str() != "/")
            .map(|parent| disk_path(base, &parent))
            .collect()
    }
}

/// Maps a tree path onto the disk below `base`.
fn disk_path(base: &Path, path: &FilePath) -> PathBuf {
    path.relative()
        .split('/')
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Temp file used for atomic writes: a hidden sibling of the target.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Writes one file, fully replacing previous content.
fn write_file(path: &Path, content: &str, options: &ExportOptions) -> Result<()> {
    if !options.atomic {
        return fs::write(path, content).map_err(|e| FilesError::write_failure(path, e));
    }

    let temp = temp_path(path);
    let written = fs::File::create(&temp).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.sync_all()
    });

    if let Err(e) = written {
        // Best effort; the original error is what matters.
        let _ = fs::remove_file(&temp);
        return Err(FilesError::write_failure(&temp, e));
    }

    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        FilesError::write_failure(path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilesBuilder;
    use tempfile::TempDir;

    fn sample_tree() -> FileSystem {
        FilesBuilder::new()
            .add_file("/Makefile.am", "SUBDIRS = providers services\n")
            .add_file("/providers/aim.provider", "<provider/>\n")
            .add_file("/services/aim-im.service", "<service/>\n")
            .build()
            .unwrap()
    }

    #[test]
    fn test_export_creates_structure() {
        let temp = TempDir::new().unwrap();
        sample_tree().export_to_filesystem(temp.path()).unwrap();

        assert!(temp.path().join("providers").is_dir());
        assert!(temp.path().join("services").is_dir());
        assert_eq!(
            fs::read_to_string(temp.path().join("Makefile.am")).unwrap(),
            "SUBDIRS = providers services\n"
        );
    }

    #[test]
    fn test_export_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        sample_tree().export_to_filesystem(temp.path()).unwrap();

        for dir in [temp.path().to_path_buf(), temp.path().join("providers")] {
            for entry in fs::read_dir(dir).unwrap() {
                let name = entry.unwrap().file_name().to_string_lossy().into_owned();
                assert!(!name.ends_with(".tmp"), "stray temp file {name}");
            }
        }
    }

    #[test]
    fn test_export_overwrites_longer_content() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("Makefile.am");
        fs::write(&target, "a much longer previous content that must vanish\n").unwrap();

        sample_tree().export_to_filesystem(temp.path()).unwrap();
        assert_eq!(
            fs::read_to_string(target).unwrap(),
            "SUBDIRS = providers services\n"
        );
    }

    #[test]
    fn test_export_non_atomic() {
        let temp = TempDir::new().unwrap();
        let options = ExportOptions::default().with_atomic_writes(false);
        sample_tree()
            .export_to_filesystem_with_options(temp.path(), &options)
            .unwrap();
        assert!(temp.path().join("services/aim-im.service").exists());
    }

    #[test]
    fn test_export_missing_base_is_write_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = sample_tree().export_to_filesystem(&missing).unwrap_err();
        assert!(err.is_write_failure());
        assert!(!missing.exists());
    }

    #[test]
    fn test_export_blocked_directory_is_write_failure() {
        let temp = TempDir::new().unwrap();
        // A regular file where the providers directory should go
        fs::write(temp.path().join("providers"), "").unwrap();

        let err = sample_tree().export_to_filesystem(temp.path()).unwrap_err();
        assert!(err.is_write_failure());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path(Path::new("/out/services/aim-im.service"));
        assert_eq!(temp, Path::new("/out/services/.aim-im.service.tmp"));
    }

    #[test]
    fn test_disk_path_mapping() {
        let path = FilePath::new("/providers/local-xmpp.provider").unwrap();
        assert_eq!(
            disk_path(Path::new("/base"), &path),
            Path::new("/base/providers/local-xmpp.provider")
        );
    }
}
