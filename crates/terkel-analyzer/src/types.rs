//! Supporting types for the analysis pipeline

use std::fmt;
use std::path::Path;

use terkel_domain::CoverageReport;
use terkel_extract::{ExtractError, FileKind};

/// An input document: a file name plus its raw bytes.
///
/// The name is only used to pick the extraction format; content is
/// always taken from `bytes`.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name, including extension
    pub name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from a name and raw bytes
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a source file from disk
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }

    /// Determine the file kind from the name's extension
    pub fn kind(&self) -> Result<FileKind, ExtractError> {
        FileKind::from_name(&self.name)
    }
}

/// Which slot a document fills in an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The interview transcript
    Transcript,
    /// The question outline
    Outline,
}

impl DocumentRole {
    /// Whether this role accepts the given file kind
    pub fn permits(&self, kind: FileKind) -> bool {
        match self {
            DocumentRole::Transcript => matches!(kind, FileKind::Pdf | FileKind::Docx),
            DocumentRole::Outline => matches!(kind, FileKind::Docx | FileKind::Txt),
        }
    }

    /// Human-readable list of accepted formats
    pub fn expected(&self) -> &'static str {
        match self {
            DocumentRole::Transcript => "pdf or docx",
            DocumentRole::Outline => "docx or txt",
        }
    }

    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRole::Transcript => "transcript",
            DocumentRole::Outline => "outline",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a reply line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The line contains no field separator at all
    NoDelimiter,
    /// The line splits into fewer than three fields
    TooFewFields,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::NoDelimiter => write!(f, "no field separator"),
            DropReason::TooFewFields => write!(f, "fewer than three fields"),
        }
    }
}

/// A reply line that was discarded during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based line number within the reply
    pub line_no: usize,
    /// The line content, trimmed
    pub content: String,
    /// Why the line was discarded
    pub reason: DropReason,
}

/// Outcome of parsing one model reply
#[derive(Debug, Clone, Default)]
pub struct ParsedReply {
    /// Records recovered from the reply, in reply order
    pub report: CoverageReport,
    /// Lines that produced no record
    pub dropped: Vec<DroppedLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_role_permits() {
        let role = DocumentRole::Transcript;
        assert!(role.permits(FileKind::Pdf));
        assert!(role.permits(FileKind::Docx));
        assert!(!role.permits(FileKind::Txt));
    }

    #[test]
    fn test_outline_role_permits() {
        let role = DocumentRole::Outline;
        assert!(role.permits(FileKind::Docx));
        assert!(role.permits(FileKind::Txt));
        assert!(!role.permits(FileKind::Pdf));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(DocumentRole::Transcript.to_string(), "transcript");
        assert_eq!(DocumentRole::Outline.to_string(), "outline");
    }

    #[test]
    fn test_source_file_kind() {
        let file = SourceFile::new("notes.TXT", b"hello".to_vec());
        assert_eq!(file.kind().unwrap(), FileKind::Txt);

        let file = SourceFile::new("no_extension", Vec::new());
        assert!(file.kind().is_err());
    }

    #[test]
    fn test_drop_reason_display() {
        assert_eq!(DropReason::NoDelimiter.to_string(), "no field separator");
        assert_eq!(
            DropReason::TooFewFields.to_string(),
            "fewer than three fields"
        );
    }
}
