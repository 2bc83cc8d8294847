//! Consumers of reconstructed words.
//!
//! The driver hands each word to a [`WordSink`] as soon as it is complete,
//! in page order. Sinks decide what "consuming" means: logging, printing,
//! or collecting for storage.

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::layout::{PageWord, Word};

/// Receives words one at a time.
pub trait WordSink {
    fn accept(&mut self, page: usize, word: Word) -> Result<()>;

    /// Called once after the last page. Defaults to a no-op.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: WordSink + ?Sized> WordSink for &mut S {
    fn accept(&mut self, page: usize, word: Word) -> Result<()> {
        (**self).accept(page, word)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Emits one `info` event per word.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WordSink for LogSink {
    fn accept(&mut self, page: usize, word: Word) -> Result<()> {
        info!(
            page,
            font = %word.font,
            font_size = word.font_size,
            x = word.x,
            y = word.y,
            width = word.width,
            "{}",
            word.text
        );
        Ok(())
    }
}

/// Collects words in emission order.
#[derive(Debug, Default, Clone)]
pub struct WordCollector {
    pub words: Vec<PageWord>,
}

impl WordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words found on one page.
    pub fn page(&self, page: usize) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .filter(move |w| w.page == page)
            .map(|w| &w.word)
    }

    pub fn into_words(self) -> Vec<PageWord> {
        self.words
    }
}

impl WordSink for WordCollector {
    fn accept(&mut self, page: usize, word: Word) -> Result<()> {
        self.words.push(PageWord { page, word });
        Ok(())
    }
}

/// Writes one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WordSink for JsonLinesSink<W> {
    fn accept(&mut self, page: usize, word: Word) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &PageWord { page, word })?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the human-readable block per word, separated by blank lines.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    current_page: Option<usize>,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_page: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WordSink for TextSink<W> {
    fn accept(&mut self, page: usize, word: Word) -> Result<()> {
        if self.current_page != Some(page) {
            writeln!(self.writer, "── Page {page} ──\n")?;
            self.current_page = Some(page);
        }
        writeln!(self.writer, "{word}\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextFragment;

    fn word(text: &str, x: f64) -> Word {
        Word::from_fragment(text.into(), &TextFragment::new(text, x, 10.0, 4.0).with_font("F1", 9.0))
    }

    #[test]
    fn collector_keeps_order_and_pages() {
        let mut sink = WordCollector::new();
        sink.accept(1, word("a", 0.0)).unwrap();
        sink.accept(1, word("b", 50.0)).unwrap();
        sink.accept(3, word("c", 0.0)).unwrap();

        let page_one: Vec<_> = sink.page(1).map(|w| w.text.as_str()).collect();
        assert_eq!(page_one, vec!["a", "b"]);
        assert_eq!(sink.page(2).count(), 0);
        assert_eq!(sink.into_words()[2].page, 3);
    }

    #[test]
    fn json_lines_one_object_per_word() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.accept(2, word("hi", 1.0)).unwrap();
        sink.accept(2, word("yo", 30.0)).unwrap();
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["page"], 2);
        assert_eq!(first["text"], "hi");
        assert_eq!(first["font"], "F1");
    }

    #[test]
    fn text_sink_writes_page_headers_once() {
        let mut sink = TextSink::new(Vec::new());
        sink.accept(1, word("a", 0.0)).unwrap();
        sink.accept(1, word("b", 50.0)).unwrap();
        sink.accept(2, word("c", 0.0)).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.matches("── Page 1 ──").count(), 1);
        assert_eq!(out.matches("── Page 2 ──").count(), 1);
        assert!(out.contains("Text: b\nFont: F1\nFontSize: 9.00\nX: 50.00"));
    }

    #[test]
    fn log_sink_accepts_words() {
        let mut sink = LogSink;
        assert!(sink.accept(1, word("logged", 0.0)).is_ok());
    }

    #[test]
    fn mutable_reference_is_a_sink() {
        fn feed<S: WordSink>(mut sink: S) {
            sink.accept(1, word("x", 0.0)).unwrap();
            sink.finish().unwrap();
        }

        let mut collector = WordCollector::new();
        feed(&mut collector);
        assert_eq!(collector.words.len(), 1);
    }
}
