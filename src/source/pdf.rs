//! PDF pages decoded through `pdfium-render` (Chromium's PDF library).
//!
//! Each pdfium text character becomes one fragment: baseline origin for
//! `x`/`y`, loose-bounds width, font name and unscaled font size. Fragments
//! keep pdfium's character order, which follows the content stream.

use pdfium_render::prelude::*;
use tracing::debug;

use super::{check_page, FragmentSource};
use crate::error::{Error, Result};
use crate::layout::TextFragment;

/// Bind to the pdfium shared library installed on the system.
pub fn bind_system_pdfium() -> Result<Pdfium> {
    Ok(Pdfium::new(Pdfium::bind_to_system_library()?))
}

/// A [`FragmentSource`] over a loaded PDF document.
pub struct PdfFragmentSource<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfFragmentSource<'a> {
    pub fn load(pdfium: &'a Pdfium, bytes: &'a [u8]) -> Result<Self> {
        let document = pdfium.load_pdf_from_byte_slice(bytes, None)?;
        Ok(Self { document })
    }

    #[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
    fn decode_page(&self, page: usize, index: PdfPageIndex) -> Result<Vec<TextFragment>> {
        let pdf_page = self.document.pages().get(index)?;
        let text = pdf_page.text().map_err(|e| Error::Decode {
            page,
            reason: format!("failed to extract text: {e}"),
        })?;

        let mut fragments = Vec::new();
        for ch in text.chars().iter() {
            let Some(s) = ch.unicode_string().filter(|s| !s.is_empty()) else {
                continue;
            };
            let (Ok((origin_x, origin_y)), Ok(bounds)) = (ch.origin(), ch.loose_bounds()) else {
                debug!(page, text = %s, "skipping character without geometry");
                continue;
            };

            fragments.push(
                TextFragment::new(
                    s,
                    f64::from(origin_x.value),
                    f64::from(origin_y.value),
                    f64::from((bounds.right.value - bounds.left.value).abs()),
                )
                .with_font(ch.font_name(), f64::from(ch.unscaled_font_size().value)),
            );
        }

        Ok(fragments)
    }
}

impl FragmentSource for PdfFragmentSource<'_> {
    fn page_count(&self) -> usize {
        usize::from(self.document.pages().len())
    }

    fn page_fragments(&mut self, page: usize) -> Result<Option<Vec<TextFragment>>> {
        let index = check_page(page, self.page_count())?;
        let index = PdfPageIndex::try_from(index).map_err(|_| Error::PageOutOfRange {
            page,
            page_count: self.page_count(),
        })?;

        let fragments = self.decode_page(page, index)?;
        if fragments.is_empty() {
            // No text layer: scanned image or blank page.
            return Ok(None);
        }
        Ok(Some(fragments))
    }
}
