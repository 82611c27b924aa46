//! Terkel CLI library.
//!
//! This library provides the core functionality for the Terkel command-line
//! interface: argument parsing, command execution, output formatting, CSV
//! export, and the interactive session loop.

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod output;
pub mod repl;

pub use cli::{Cli, CliFormat, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
