//! Core types, plugin table, and errors for the online-accounts plugin generator.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`ProtocolId`, `PluginRecord`)
//! - The ordered, validated `PluginTable` including the built-in table
//! - Error hierarchy with contextual information
//! - Generator configuration and CLI primitives

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
mod table;
mod types;

pub use config::{DEFAULT_GENERATED_BY, GeneratorConfig, validate_generated_by};
pub use error::{Error, Result};
pub use table::PluginTable;
pub use types::{PluginRecord, ProtocolId};
