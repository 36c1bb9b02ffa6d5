//! Command implementations for `uoa-plugin-gen`.
//!
//! Each command builds a serializable report, prints it in the requested
//! format and returns an exit code.

pub mod completions;
pub mod generate;
pub mod list;
