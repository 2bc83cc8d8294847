//! Word reconstruction from positioned text fragments.
//!
//! PDF content streams rarely draw a word in one operation: kerning and
//! font switches split it into several glyph runs. This module merges runs
//! that sit on the same baseline with a small horizontal gap back into words.
//!
//! # Pipeline
//!
//! ```text
//! page fragments (drawing order) → adjacency predicate → accumulator → words
//! ```
//!
//! # Example
//!
//! ```rust
//! use tsundoku::layout::{reconstruct_page, LayoutConfig, TextFragment};
//!
//! let fragments = vec![
//!     TextFragment::new("Hel", 0.0, 0.0, 10.0),
//!     TextFragment::new("lo", 12.0, 0.0, 8.0),
//! ];
//! let words = reconstruct_page(fragments, &LayoutConfig::default());
//! assert_eq!(words.len(), 1);
//! assert_eq!(words[0].text, "Hello");
//! assert_eq!(words[0].x, 12.0);
//! ```

pub mod adjacency;
pub mod reconstruct;
pub mod types;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use adjacency::continues_word;
pub use reconstruct::{reconstruct_page, reconstruct_words, Words};
pub use types::{PageWord, TextFragment, Word};

/// Default strict upper bound on the gap between two runs of one word.
pub const DEFAULT_GAP_THRESHOLD: f64 = 20.0;

/// Which constituent fragment a word takes its font and geometry from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryAttribution {
    /// The most recently absorbed fragment. Matches what the upload service
    /// has always logged, even though the word's origin is further left.
    #[default]
    Last,
    /// The fragment that started the word.
    First,
}

/// Tunables for the adjacency predicate and word emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// A run continues a word only if its gap is strictly below this.
    pub gap_threshold: f64,
    /// Allowed baseline difference. `0.0` means exact equality.
    pub baseline_tolerance: f64,
    pub geometry: GeometryAttribution,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            baseline_tolerance: 0.0,
            geometry: GeometryAttribution::Last,
        }
    }
}

impl LayoutConfig {
    /// Reject thresholds that would make the predicate meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.gap_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "gap_threshold must be finite, got {}",
                self.gap_threshold
            )));
        }
        if !self.baseline_tolerance.is_finite() || self.baseline_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "baseline_tolerance must be a non-negative number, got {}",
                self.baseline_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_exact_baseline_and_twenty_units() {
        let config = LayoutConfig::default();
        assert!((config.gap_threshold - 20.0).abs() < f64::EPSILON);
        assert!(config.baseline_tolerance.abs() < f64::EPSILON);
        assert_eq!(config.geometry, GeometryAttribution::Last);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_tolerance() {
        let config = LayoutConfig {
            baseline_tolerance: -0.5,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_nan_gap() {
        let config = LayoutConfig {
            gap_threshold: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn geometry_attribution_parses_lowercase() {
        let parsed: GeometryAttribution = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(parsed, GeometryAttribution::First);
    }
}
