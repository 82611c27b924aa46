//! File kind module - extension-based format identification

use crate::ExtractError;

/// Supported document formats, identified by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Portable Document Format
    Pdf,

    /// Office Open XML word-processing document
    Docx,

    /// Plain UTF-8 text
    Txt,
}

impl FileKind {
    /// Get the kind name as its extension string
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Txt => "txt",
        }
    }

    /// Identify a file by the extension of its name, case-insensitively.
    ///
    /// # Errors
    /// Returns `UnsupportedExtension` for names without a recognized
    /// extension.
    pub fn from_name(name: &str) -> Result<Self, ExtractError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("pdf") {
            Ok(FileKind::Pdf)
        } else if extension.eq_ignore_ascii_case("docx") {
            Ok(FileKind::Docx)
        } else if extension.eq_ignore_ascii_case("txt") {
            Ok(FileKind::Txt)
        } else {
            Err(ExtractError::UnsupportedExtension(name.to_string()))
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileKind::from_name("interview.pdf").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_name("outline.docx").unwrap(), FileKind::Docx);
        assert_eq!(FileKind::from_name("notes.txt").unwrap(), FileKind::Txt);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(FileKind::from_name("REPORT.PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_name("Guide.DocX").unwrap(), FileKind::Docx);
    }

    #[test]
    fn test_unsupported_rejected() {
        assert!(FileKind::from_name("notes.md").is_err());
        assert!(FileKind::from_name("archive.tar.gz").is_err());
        assert!(FileKind::from_name("no_extension").is_err());
    }

    #[test]
    fn test_dotted_names_use_last_extension() {
        assert_eq!(
            FileKind::from_name("2024.06.interview.pdf").unwrap(),
            FileKind::Pdf
        );
    }
}
