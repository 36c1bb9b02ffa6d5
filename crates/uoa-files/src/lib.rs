//! In-memory file tree for generated descriptors.
//!
//! Generated output is first collected into a [`FileSystem`] so paths are
//! validated before anything touches the disk, then exported in one pass.
//!
//! # Examples
//!
//! ```
//! use uoa_files::FilesBuilder;
//! use uoa_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("providers/aim.provider", "<provider/>"));
//! code.add_file(GeneratedFile::new("providers/Makefile.am", "providers_DATA ="));
//!
//! let tree = FilesBuilder::from_generated_code(code, "/").build().unwrap();
//!
//! assert!(tree.exists("/providers/aim.provider"));
//! assert_eq!(tree.file_count(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod filesystem;
pub mod types;
pub mod vfs;

pub use builder::{FilesBuilder, expand_tilde};
pub use filesystem::ExportOptions;
pub use types::{FileEntry, FilePath, FilesError, Result};
pub use vfs::FileSystem;
