// ABOUTME: PDF text extraction, page by page
// ABOUTME: Pages with no extractable text are skipped; an all-image PDF yields ""

use lopdf::Document;
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// Extract text from a PDF, concatenating pages with newline separators.
/// Pages that yield no extractable text are skipped silently.
pub fn extract_text(bytes: &[u8]) -> IngestResult<String> {
    let doc = Document::load_mem(bytes).map_err(|e| IngestError::Pdf(e.to_string()))?;

    let mut pages_text = Vec::new();
    for (page_number, _) in doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => pages_text.push(text.trim_end().to_string()),
            Ok(_) => debug!("Page {} has no extractable text, skipping", page_number),
            Err(e) => debug!("Page {} text extraction failed ({}), skipping", page_number, e),
        }
    }

    Ok(pages_text.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_pdf_error() {
        let result = extract_text(b"not a pdf at all");
        assert!(matches!(result, Err(IngestError::Pdf(_))));
    }

    #[test]
    fn test_empty_input_is_a_pdf_error() {
        let result = extract_text(&[]);
        assert!(matches!(result, Err(IngestError::Pdf(_))));
    }
}
