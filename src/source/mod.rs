//! Page fragment sources.
//!
//! A [`FragmentSource`] turns one page of a document into its text
//! fragments in drawing order. The reconstructor never decodes PDFs itself;
//! it only consumes what a source hands it.
//!
//! | Input | Source | Feature Flag |
//! |-------|--------|-------------|
//! | fragment dump (`.json`) | [`JsonFragmentSource`] | always |
//! | `application/pdf` | [`PdfFragmentSource`] | `pdf` |

pub mod json;
#[cfg(feature = "pdf")]
pub mod pdf;

use std::path::Path;

use crate::error::{Error, Result};
use crate::layout::TextFragment;

pub use json::JsonFragmentSource;
#[cfg(feature = "pdf")]
pub use pdf::PdfFragmentSource;

/// Supplies decoded pages to the page driver.
pub trait FragmentSource {
    /// Number of pages. Pages are numbered `1..=page_count()`.
    fn page_count(&self) -> usize;

    /// Fragments of one page in drawing order.
    ///
    /// `Ok(None)` means the page is null (no content stream) and is skipped.
    /// An error means this page could not be decoded; the driver's policy
    /// decides whether the document continues.
    fn page_fragments(&mut self, page: usize) -> Result<Option<Vec<TextFragment>>>;
}

/// Input formats the CLI knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pdf,
    Json,
}

impl InputKind {
    /// Classify an input from its extension, falling back to its first bytes.
    pub fn detect(path: &Path, head: &[u8]) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => return Ok(Self::Pdf),
            Some("json") => return Ok(Self::Json),
            _ => {}
        }

        if head.starts_with(b"%PDF-") {
            return Ok(Self::Pdf);
        }
        if head
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|b| *b == b'{')
        {
            return Ok(Self::Json);
        }

        Err(Error::UnsupportedInput(path.display().to_string()))
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Json => "application/json",
        }
    }
}

/// Check a 1-based page number against a page count.
pub(crate) fn check_page(page: usize, page_count: usize) -> Result<usize> {
    if page == 0 || page > page_count {
        return Err(Error::PageOutOfRange { page, page_count });
    }
    Ok(page - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(InputKind::detect(Path::new("book.PDF"), b"").unwrap(), InputKind::Pdf);
        assert_eq!(
            InputKind::detect(Path::new("dump.json"), b"").unwrap(),
            InputKind::Json
        );
    }

    #[test]
    fn detects_by_magic_bytes() {
        assert_eq!(
            InputKind::detect(Path::new("upload.bin"), b"%PDF-1.7\n").unwrap(),
            InputKind::Pdf
        );
        assert_eq!(
            InputKind::detect(Path::new("upload"), b"  \n{\"pages\":[]}").unwrap(),
            InputKind::Json
        );
    }

    #[test]
    fn rejects_unknown_input() {
        let err = InputKind::detect(Path::new("notes.txt"), b"plain words").unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput(_)));
    }

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(check_page(1, 3).unwrap(), 0);
        assert_eq!(check_page(3, 3).unwrap(), 2);
        assert!(matches!(
            check_page(0, 3),
            Err(Error::PageOutOfRange { page: 0, page_count: 3 })
        ));
        assert!(check_page(4, 3).is_err());
    }
}
