//! PDF extraction via lopdf, page by page

use lopdf::Document;
use tracing::debug;

use crate::ExtractError;

/// Extract text from PDF bytes.
///
/// Pages are walked in document order; each page's text is extracted
/// separately and pages that decode to whitespace only are skipped. Page
/// texts join with a single newline.
///
/// # Errors
/// Returns `ExtractError::Pdf` if the document cannot be loaded or a page
/// fails to decode.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let pages = doc.get_pages();
    debug!("PDF loaded with {} page(s)", pages.len());

    let mut page_texts = Vec::with_capacity(pages.len());
    for (page_num, _page_id) in pages {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::Pdf(format!("page {}: {}", page_num, e)))?;
        if !text.trim().is_empty() {
            page_texts.push(text.trim_end().to_string());
        }
    }

    Ok(page_texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(extract_pdf(b""), Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_truncated_header_rejected() {
        assert!(matches!(
            extract_pdf(b"%PDF-1.5\nbroken"),
            Err(ExtractError::Pdf(_))
        ));
    }
}
