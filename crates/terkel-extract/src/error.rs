//! Error types for document extraction

use thiserror::Error;

/// Errors that can occur while turning file bytes into plain text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// PDF could not be loaded or a page yielded no text
    #[error("PDF error: {0}")]
    Pdf(String),

    /// DOCX container is not a readable zip archive
    #[error("DOCX archive error: {0}")]
    DocxArchive(String),

    /// DOCX body XML is malformed
    #[error("DOCX XML error: {0}")]
    DocxXml(String),

    /// Archive is a zip but carries no word/document.xml
    #[error("Not a DOCX document: word/document.xml missing")]
    MissingDocumentXml,

    /// Plain-text bytes are not valid UTF-8
    #[error("Text is not valid UTF-8: {0}")]
    Utf8(String),

    /// File name carries an extension outside the supported set
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
}
