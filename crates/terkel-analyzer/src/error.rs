//! Error types for the analysis pipeline

use crate::types::DocumentRole;
use terkel_extract::ExtractError;
use thiserror::Error;

/// Errors that can occur during an analysis run
///
/// Every variant is terminal for the current run: the session is left
/// untouched and the user corrects the condition and reruns.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// File extension is outside the set permitted for its role
    #[error("Unsupported {role} file '{name}': expected {expected}")]
    UnsupportedFile {
        /// Which input the file was supplied as
        role: DocumentRole,
        /// The offending file name
        name: String,
        /// Human-readable list of permitted extensions
        expected: &'static str,
    },

    /// Document bytes could not be turned into text
    #[error("Failed to read {role}: {source}")]
    Extraction {
        /// Which input failed to extract
        role: DocumentRole,
        /// The underlying extraction failure
        #[source]
        source: ExtractError,
    },

    /// Transcript extracted to no text
    #[error("Transcript contains no text")]
    EmptyTranscript,

    /// Outline produced zero questions
    #[error("Outline contains no questions")]
    NoQuestions,

    /// Transcript exceeds the configured length cap
    #[error("Transcript too long: {0} chars (max: {1})")]
    TranscriptTooLong(usize, usize),

    /// Model client failure, rendered with status and message where known
    #[error("Model error: {0}")]
    Provider(String),

    /// The model call exceeded the configured timeout
    #[error("Model call timed out")]
    Timeout,

    /// Strict parsing: a reply line could not form a record
    #[error("Malformed reply line {line}: '{content}'")]
    MalformedReplyLine {
        /// 1-based line number within the reply
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// Strict parsing: a coverage label outside the canonical three
    #[error("Unrecognized coverage label on reply line {line}: '{label}'")]
    UnrecognizedCoverage {
        /// 1-based line number within the reply
        line: usize,
        /// The label text as the model emitted it
        label: String,
    },
}
