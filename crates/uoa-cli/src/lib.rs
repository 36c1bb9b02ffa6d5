//! Library side of the `uoa-plugin-gen` command.
//!
//! Argument definitions, command implementations and output formatters
//! live here so integration tests can drive them without spawning the
//! binary.

#![allow(clippy::format_push_string)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;
