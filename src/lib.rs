//! `tsundoku` - words with layout metadata from positioned PDF text
//!
//! # Features
//!
//! - **Word reconstruction**: merges glyph runs that share a baseline and sit
//!   close together into words, lazily, one page at a time
//! - **Fragment sources**: JSON fragment dumps, or real PDFs via pdfium
//!   (`pdf` feature)
//! - **Sinks**: structured logging, JSON lines, plain text, in-memory collection
//!
//! # Example
//!
//! ```rust
//! use tsundoku::{JsonFragmentSource, PageDriver, WordCollector};
//!
//! let dump = br#"{"pages": [[
//!     {"text": "Hel", "x": 0, "y": 0, "width": 10, "font": "F1", "fontSize": 12},
//!     {"text": "lo", "x": 12, "y": 0, "width": 8, "font": "F1", "fontSize": 12}
//! ]]}"#;
//!
//! let mut source = JsonFragmentSource::from_slice(dump)?;
//! let mut words = WordCollector::new();
//! PageDriver::default().run(&mut source, &mut words)?;
//! assert_eq!(words.words[0].word.text, "Hello");
//! # Ok::<(), tsundoku::Error>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod sink;
pub mod source;

pub use config::{load_settings, Settings};
pub use driver::{DocumentSummary, PageDriver, PageErrorPolicy};
pub use error::{Error, Result};
pub use layout::{
    continues_word, reconstruct_page, reconstruct_words, GeometryAttribution, LayoutConfig,
    PageWord, TextFragment, Word,
};
pub use sink::{JsonLinesSink, LogSink, TextSink, WordCollector, WordSink};
pub use source::{FragmentSource, InputKind, JsonFragmentSource};
#[cfg(feature = "pdf")]
pub use source::PdfFragmentSource;

/// Version of tsundoku
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
