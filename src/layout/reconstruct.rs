//! Accumulation state machine that turns a page's fragments into words.

use super::adjacency::continues_word;
use super::{GeometryAttribution, LayoutConfig, TextFragment, Word};

/// A word in progress.
#[derive(Debug)]
struct Accumulator {
    text: String,
    first: TextFragment,
    last: TextFragment,
}

impl Accumulator {
    fn start(fragment: TextFragment) -> Self {
        Self {
            text: fragment.text.clone(),
            first: fragment.clone(),
            last: fragment,
        }
    }

    fn absorb(&mut self, fragment: TextFragment) {
        self.text.push_str(&fragment.text);
        self.last = fragment;
    }

    /// `None` when only empty runs were seen; an empty word is never emitted.
    fn finish(self, geometry: GeometryAttribution) -> Option<Word> {
        if self.text.is_empty() {
            return None;
        }
        let source = match geometry {
            GeometryAttribution::Last => &self.last,
            GeometryAttribution::First => &self.first,
        };
        Some(Word::from_fragment(self.text, source))
    }
}

/// Lazy iterator over the words of one page.
///
/// Created by [`reconstruct_words`]. Holds no state beyond the word in
/// progress, so a fresh iterator per page keeps pages independent.
#[derive(Debug)]
pub struct Words<'c, I> {
    fragments: I,
    config: &'c LayoutConfig,
    pending: Option<Accumulator>,
}

impl<I> Iterator for Words<'_, I>
where
    I: Iterator<Item = TextFragment>,
{
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        for fragment in self.fragments.by_ref() {
            match self.pending.take() {
                Some(mut acc)
                    if !acc.text.is_empty()
                        && continues_word(self.config, &acc.last, &fragment) =>
                {
                    acc.absorb(fragment);
                    self.pending = Some(acc);
                }
                Some(acc) => {
                    self.pending = Some(Accumulator::start(fragment));
                    if let Some(word) = acc.finish(self.config.geometry) {
                        return Some(word);
                    }
                }
                None => self.pending = Some(Accumulator::start(fragment)),
            }
        }

        self.pending
            .take()
            .and_then(|acc| acc.finish(self.config.geometry))
    }
}

/// Group `fragments` (one page, drawing order) into words.
///
/// Words are yielded in the order their runs complete. The first fragment
/// always starts a word; a fragment joins the current word when
/// [`continues_word`] holds against the fragment absorbed just before it.
pub fn reconstruct_words<I>(fragments: I, config: &LayoutConfig) -> Words<'_, I::IntoIter>
where
    I: IntoIterator<Item = TextFragment>,
{
    Words {
        fragments: fragments.into_iter(),
        config,
        pending: None,
    }
}

/// Eager form of [`reconstruct_words`].
pub fn reconstruct_page<I>(fragments: I, config: &LayoutConfig) -> Vec<Word>
where
    I: IntoIterator<Item = TextFragment>,
{
    reconstruct_words(fragments, config).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f64, y: f64, width: f64) -> TextFragment {
        TextFragment::new(text, x, y, width).with_font("F1", 12.0)
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn empty_page_yields_nothing() {
        let words = reconstruct_page(Vec::new(), &LayoutConfig::default());
        assert!(words.is_empty());
    }

    #[test]
    fn single_fragment_is_one_word() {
        let fragment = frag("Alone", 72.0, 700.0, 30.0).with_font("Times-Roman", 10.5);
        let words = reconstruct_page(vec![fragment.clone()], &LayoutConfig::default());
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "Alone");
        assert_eq!(words[0].font, "Times-Roman");
        assert_eq!(words[0].font_size, 10.5);
        assert_eq!((words[0].x, words[0].y, words[0].width), (72.0, 700.0, 30.0));
    }

    #[test]
    fn close_runs_merge_with_last_geometry() {
        let words = reconstruct_page(
            vec![frag("Hel", 0.0, 0.0, 10.0), frag("lo", 12.0, 0.0, 8.0)],
            &LayoutConfig::default(),
        );
        assert_eq!(texts(&words), vec!["Hello"]);
        assert_eq!((words[0].x, words[0].y, words[0].width), (12.0, 0.0, 8.0));
    }

    #[test]
    fn wide_gap_splits_words() {
        let words = reconstruct_page(
            vec![frag("Hi", 0.0, 0.0, 5.0), frag("There", 30.0, 0.0, 20.0)],
            &LayoutConfig::default(),
        );
        assert_eq!(texts(&words), vec!["Hi", "There"]);
        assert_eq!((words[0].x, words[0].width), (0.0, 5.0));
        assert_eq!((words[1].x, words[1].width), (30.0, 20.0));
    }

    #[test]
    fn baseline_change_splits_even_when_touching() {
        let words = reconstruct_page(
            vec![frag("up", 0.0, 0.0, 10.0), frag("down", 10.0, 5.0, 10.0)],
            &LayoutConfig::default(),
        );
        assert_eq!(texts(&words), vec!["up", "down"]);
    }

    #[test]
    fn predicate_compares_against_previous_fragment_not_word_start() {
        // Each hop is 5 units; the total span is far beyond the threshold.
        let fragments: Vec<_> = (0..10)
            .map(|i| frag("x", f64::from(i) * 15.0, 0.0, 10.0))
            .collect();
        let words = reconstruct_page(fragments, &LayoutConfig::default());
        assert_eq!(texts(&words), vec!["xxxxxxxxxx"]);
        assert_eq!(words[0].x, 135.0);
    }

    #[test]
    fn mixed_line_and_new_line() {
        let fragments = vec![
            frag("The", 72.0, 700.0, 18.0),
            frag("qu", 100.0, 700.0, 12.0),
            frag("ick", 112.5, 700.0, 14.0),
            frag("fox", 150.0, 700.0, 15.0),
            frag("jumps", 72.0, 686.0, 28.0),
        ];
        let words = reconstruct_page(fragments, &LayoutConfig::default());
        // 100 - 90 = 10 merges "The" and "qu"; 150 - 126.5 = 23.5 splits.
        assert_eq!(texts(&words), vec!["Thequick", "fox", "jumps"]);
        assert_eq!(words[0].x, 112.5);
        assert_eq!(words[2].y, 686.0);
    }

    #[test]
    fn first_geometry_attribution_keeps_word_origin() {
        let config = LayoutConfig {
            geometry: GeometryAttribution::First,
            ..LayoutConfig::default()
        };
        let words = reconstruct_page(
            vec![
                frag("Hel", 0.0, 0.0, 10.0).with_font("F-Bold", 14.0),
                frag("lo", 12.0, 0.0, 8.0),
            ],
            &config,
        );
        assert_eq!(texts(&words), vec!["Hello"]);
        assert_eq!((words[0].x, words[0].width), (0.0, 10.0));
        assert_eq!(words[0].font, "F-Bold");
        assert_eq!(words[0].font_size, 14.0);
    }

    #[test]
    fn empty_runs_never_produce_empty_words() {
        let fragments = vec![
            frag("", 0.0, 0.0, 0.0),
            frag("", 100.0, 50.0, 0.0),
            frag("ok", 1.0, 50.0, 5.0),
        ];
        let words = reconstruct_page(fragments, &LayoutConfig::default());
        assert_eq!(texts(&words), vec!["ok"]);
    }

    #[test]
    fn iterator_is_lazy() {
        let mut consumed = 0;
        let fragments = [
            frag("a", 0.0, 0.0, 5.0),
            frag("b", 100.0, 0.0, 5.0),
            frag("c", 200.0, 0.0, 5.0),
        ]
        .into_iter()
        .inspect(|_| consumed += 1);

        let config = LayoutConfig::default();
        let mut words = reconstruct_words(fragments, &config);
        let first = words.next().unwrap();
        assert_eq!(first.text, "a");
        // "a" is only known complete once "b" has been seen.
        drop(words);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn rerunning_gives_identical_output() {
        let fragments = vec![
            frag("re", 0.0, 10.0, 8.0),
            frag("run", 9.0, 10.0, 12.0),
            frag("again", 60.0, 10.0, 20.0),
        ];
        let config = LayoutConfig::default();
        let first = reconstruct_page(fragments.clone(), &config);
        let second = reconstruct_page(fragments, &config);
        assert_eq!(first, second);
    }
}
