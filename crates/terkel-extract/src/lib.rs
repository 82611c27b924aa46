//! Terkel Document Extraction
//!
//! Turns uploaded interview files into plain text for the analysis
//! pipeline. Three formats are supported:
//!
//! - **PDF**: page-by-page text extraction via `lopdf`
//! - **DOCX**: `word/document.xml` pulled from the archive and streamed
//!   with `quick-xml`, paragraph by paragraph
//! - **TXT**: strict UTF-8 decode
//!
//! Extraction failures are typed errors; callers halt their pipeline on
//! any of them rather than proceeding with partial text.

#![warn(missing_docs)]

pub mod docx;
pub mod error;
pub mod kind;
pub mod pdf;

pub use error::ExtractError;
pub use kind::FileKind;

use tracing::debug;

/// Extract plain text from file bytes of a declared kind.
///
/// # Errors
/// Returns an [`ExtractError`] if the bytes cannot be decoded as the
/// declared format.
pub fn extract_text(bytes: &[u8], kind: FileKind) -> Result<String, ExtractError> {
    debug!("Extracting {} bytes as {}", bytes.len(), kind.as_str());

    match kind {
        FileKind::Pdf => pdf::extract_pdf(bytes),
        FileKind::Docx => docx::extract_docx(bytes),
        FileKind::Txt => extract_txt(bytes),
    }
}

/// Decode plain-text bytes as strict UTF-8.
fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Utf8(e.to_string()))
}
