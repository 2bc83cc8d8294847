//! Error types shared by the fragment sources, sinks and page driver.
//!
//! Word reconstruction itself never fails; every variant here comes from a
//! collaborator (decoding a page, writing a word, reading an input file).

use thiserror::Error;

/// Errors surfaced while turning a document into words.
#[derive(Error, Debug)]
pub enum Error {
    /// A single page could not be decoded into text fragments.
    #[error("page {page}: {reason}")]
    Decode { page: usize, reason: String },

    #[error("page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("unsupported input: {0} (only PDF and JSON fragment files are accepted)")]
    UnsupportedInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Processing stopped at a page boundary because cancellation was requested.
    #[error("cancelled before page {page}")]
    Cancelled { page: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "pdf")]
    #[error("pdfium error: {0}")]
    Pdfium(#[from] pdfium_render::prelude::PdfiumError),
}

impl Error {
    /// Page number the error belongs to, if it is tied to one page.
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Decode { page, .. }
            | Self::PageOutOfRange { page, .. }
            | Self::Cancelled { page } => Some(*page),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
