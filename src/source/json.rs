//! Fragment dumps in JSON.
//!
//! The format is one object with a `pages` array. Each entry is either a
//! list of fragments or `null` for a page without a content stream:
//!
//! ```json
//! {"pages": [
//!   [{"text": "Hel", "x": 0, "y": 700, "width": 10, "font": "F1", "fontSize": 12}],
//!   null
//! ]}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::{check_page, FragmentSource};
use crate::error::{Error, Result};
use crate::layout::TextFragment;

#[derive(Debug, Deserialize)]
struct FragmentDump {
    pages: Vec<Option<Vec<TextFragment>>>,
}

/// A [`FragmentSource`] over pre-decoded pages.
#[derive(Debug, Clone)]
pub struct JsonFragmentSource {
    pages: Vec<Option<Vec<TextFragment>>>,
}

impl JsonFragmentSource {
    pub fn from_pages(pages: Vec<Option<Vec<TextFragment>>>) -> Self {
        Self { pages }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let dump: FragmentDump = serde_json::from_slice(bytes)?;
        Ok(Self::from_pages(dump.pages))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dump: FragmentDump = serde_json::from_reader(reader)?;
        Ok(Self::from_pages(dump.pages))
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

/// A fragment the reconstructor cannot meaningfully place.
fn validate(page: usize, index: usize, fragment: &TextFragment) -> Result<()> {
    if fragment.text.is_empty() {
        return Err(Error::Decode {
            page,
            reason: format!("fragment {index} has empty text"),
        });
    }
    let geometry = [fragment.x, fragment.y, fragment.width, fragment.font_size];
    if geometry.iter().any(|v| !v.is_finite()) {
        return Err(Error::Decode {
            page,
            reason: format!("fragment {index} has non-finite geometry"),
        });
    }
    Ok(())
}

impl FragmentSource for JsonFragmentSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&mut self, page: usize) -> Result<Option<Vec<TextFragment>>> {
        let index = check_page(page, self.pages.len())?;
        let Some(fragments) = &self.pages[index] else {
            return Ok(None);
        };

        for (i, fragment) in fragments.iter().enumerate() {
            validate(page, i, fragment)?;
        }

        Ok(Some(fragments.clone()))
    }
}
