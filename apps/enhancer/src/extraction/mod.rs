//! Extraction: turns positioned text fragments from a PDF text layer into one
//! normalized document string.
//!
//! Flow: raw page fragments → validate (per page) → reconstruct reading order →
//!       assemble pages → normalize whitespace.
//!
//! The PDF binary format is never parsed here. Fragments arrive already
//! extracted from an external text layer.

pub mod assembler;
pub mod fragment;
pub mod inspect;
pub mod reconstruct;

use thiserror::Error;
use tracing::{debug, warn};

pub use assembler::Document;
pub use fragment::{FragmentDefect, RawFragment, TextFragment};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Invalid fragment {index} on page {page}: {defect}")]
    InvalidFragment {
        page: usize,
        index: usize,
        defect: FragmentDefect,
    },

    #[error("No extractable pages in document")]
    NoExtractablePages,

    #[error("Document contains no text")]
    EmptyDocument,
}

/// Reconstructs every page and assembles the result into a single [`Document`].
///
/// A page with a malformed fragment is skipped; the document only fails when
/// no page survives, or when the surviving pages hold no text at all.
pub fn extract_document(pages: Vec<Vec<RawFragment>>) -> Result<Document, ExtractionError> {
    let page_count = pages.len();
    let mut page_texts = Vec::with_capacity(page_count);

    for (page_index, raw_page) in pages.into_iter().enumerate() {
        let page_number = page_index + 1;
        match fragment::parse_page(page_number, raw_page) {
            Ok(fragments) => {
                let text = reconstruct::reconstruct_page(&fragments);
                debug!(
                    "Page {page_number} reconstructed: {} fragments, {} chars",
                    fragments.len(),
                    text.len()
                );
                page_texts.push(text);
            }
            Err(e) => warn!("Skipping page {page_number}/{page_count}: {e}"),
        }
    }

    if page_texts.is_empty() {
        return Err(ExtractionError::NoExtractablePages);
    }

    let document = assembler::assemble(page_texts);
    if document.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str, x: f64, y: f64) -> RawFragment {
        RawFragment {
            text: Some(text.to_string()),
            x: Some(x),
            y: Some(y),
        }
    }

    #[test]
    fn test_extract_document_joins_pages_with_paragraph_break() {
        let pages = vec![
            vec![raw("Jane", 0.0, 700.0), raw("Doe", 40.0, 700.0)],
            vec![raw("Skills", 0.0, 700.0)],
        ];
        let document = extract_document(pages).unwrap();
        assert_eq!(document.text(), "Jane Doe\n\nSkills");
        assert_eq!(document.pages().len(), 2);
    }

    #[test]
    fn test_invalid_page_is_skipped_when_others_survive() {
        let broken = RawFragment {
            text: Some("lost".to_string()),
            x: None,
            y: Some(10.0),
        };
        let pages = vec![vec![broken], vec![raw("Experience", 0.0, 500.0)]];
        let document = extract_document(pages).unwrap();
        assert_eq!(document.text(), "Experience");
        assert_eq!(document.pages().len(), 1);
    }

    #[test]
    fn test_all_pages_invalid_is_an_error() {
        let broken = RawFragment {
            text: None,
            x: Some(0.0),
            y: Some(0.0),
        };
        let result = extract_document(vec![vec![broken]]);
        assert!(matches!(result, Err(ExtractionError::NoExtractablePages)));
    }

    #[test]
    fn test_no_pages_is_an_error() {
        assert!(matches!(
            extract_document(vec![]),
            Err(ExtractionError::NoExtractablePages)
        ));
    }

    #[test]
    fn test_blank_pages_yield_empty_document_error() {
        let result = extract_document(vec![vec![], vec![raw("   ", 0.0, 0.0)]]);
        assert!(matches!(result, Err(ExtractionError::EmptyDocument)));
    }
}
