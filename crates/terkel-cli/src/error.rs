//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis pipeline error
    #[error(transparent)]
    Analysis(#[from] terkel_analyzer::AnalyzerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Line editor failure
    #[error("Input error: {0}")]
    Readline(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A result-bearing command was issued before any analysis ran
    #[error("No analysis loaded. Run 'analyze' first.")]
    NoSession,

    /// An analyze command was issued before a credential was supplied
    #[error("No API key set. Use 'key' first.")]
    NoApiKey,
}
