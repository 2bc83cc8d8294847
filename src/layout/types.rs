//! Fragment and word types.
//!
//! Fragments come from a [`FragmentSource`](crate::source::FragmentSource);
//! words are what the reconstructor hands to a [`WordSink`](crate::sink::WordSink).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One positioned glyph run from a page's content stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub text: String,
    /// Left edge of the run, in page units.
    pub x: f64,
    /// Baseline Y position.
    pub y: f64,
    /// Horizontal extent of the run.
    pub width: f64,
    /// Font resource name (e.g. `"F1"`), not a font file.
    pub font: String,
    pub font_size: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            font: String::new(),
            font_size: 0.0,
        }
    }

    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>, font_size: f64) -> Self {
        self.font = font.into();
        self.font_size = font_size;
        self
    }

    /// X coordinate where this run ends.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A reconstructed word.
///
/// `text` is never empty. Font and geometry are taken from a single
/// constituent fragment, chosen by
/// [`GeometryAttribution`](super::GeometryAttribution).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    pub font: String,
    pub font_size: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Word {
    /// Build a word from accumulated text and the fragment carrying its geometry.
    pub(crate) fn from_fragment(text: String, geometry: &TextFragment) -> Self {
        Self {
            text,
            font: geometry.font.clone(),
            font_size: geometry.font_size,
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Text: {}\nFont: {}\nFontSize: {:.2}\nX: {:.2}\nY: {:.2}\nWidth: {:.2}",
            self.text, self.font, self.font_size, self.x, self.y, self.width
        )
    }
}

/// A word tagged with the 1-based page it was found on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWord {
    pub page: usize,
    #[serde(flatten)]
    pub word: Word,
}
