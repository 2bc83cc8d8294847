//! Decides whether a fragment continues the word of the fragment before it.

use super::{LayoutConfig, TextFragment};

/// Returns `true` if `current` belongs to the same word as `last`.
///
/// Both conditions must hold:
/// 1. Same baseline. With the default zero tolerance this is exact `==` on
///    `y`, so decoder jitter of a ten-thousandth of a unit splits a word.
/// 2. `current.x - last.right()` strictly below `gap_threshold`. Negative
///    gaps (overlapping or backwards runs) pass.
#[allow(clippy::float_cmp)]
pub fn continues_word(config: &LayoutConfig, last: &TextFragment, current: &TextFragment) -> bool {
    let same_baseline = if config.baseline_tolerance == 0.0 {
        last.y == current.y
    } else {
        (last.y - current.y).abs() <= config.baseline_tolerance
    };

    same_baseline && current.x - last.right() < config.gap_threshold
}
