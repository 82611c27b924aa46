//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the reply parser treats lines it cannot turn into records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsePolicy {
    /// Drop unusable lines, recording them for observability
    Lenient,
    /// Fail the run on the first unusable line or unrecognized label
    Strict,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy::Lenient
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Reply-parsing policy
    pub parse_policy: ParsePolicy,

    /// Maximum transcript length (characters)
    pub max_transcript_chars: usize,

    /// Maximum time for one model call (seconds)
    pub request_timeout_secs: u64,

    /// Summary length the model is asked to stay within (characters).
    /// Appears in the prompt rules only; the parser never enforces it.
    pub summary_char_limit: usize,
}

impl AnalyzerConfig {
    /// Get the model-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_transcript_chars == 0 {
            return Err("max_transcript_chars must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.summary_char_limit == 0 {
            return Err("summary_char_limit must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Strict preset: malformed reply lines and unrecognized labels fail
    /// the run instead of being dropped or passed through
    pub fn strict() -> Self {
        Self {
            parse_policy: ParsePolicy::Strict,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            max_transcript_chars: 150_000,
            request_timeout_secs: 120,
            summary_char_limit: 50,
        }
    }
}
