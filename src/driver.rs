//! Page driver: walks a document page by page and streams words to a sink.
//!
//! Pages are visited in ascending order, `1..=page_count`. Each page gets a
//! fresh reconstructor, so nothing carries over a page boundary. The driver
//! is synchronous; callers that must not block (an upload handler, an async
//! runtime) should run it on a blocking task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::layout::{reconstruct_words, LayoutConfig, TextFragment};
use crate::sink::WordSink;
use crate::source::FragmentSource;

/// What to do when a page cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageErrorPolicy {
    /// Stop and return the page's error.
    #[default]
    Abort,
    /// Log the failure, record the page number, carry on.
    Skip,
}

/// Counters for one document run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub pages: usize,
    pub pages_processed: usize,
    pub empty_pages: usize,
    pub failed_pages: Vec<usize>,
    pub words: usize,
}

/// Drives a [`FragmentSource`] through the word reconstructor.
#[derive(Debug, Clone, Default)]
pub struct PageDriver {
    config: LayoutConfig,
    policy: PageErrorPolicy,
    cancel: Option<Arc<AtomicBool>>,
}

impl PageDriver {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            policy: PageErrorPolicy::default(),
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PageErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop before the next page once `flag` is set.
    ///
    /// A page already in progress always runs to completion.
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn policy(&self) -> PageErrorPolicy {
        self.policy
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Reconstruct one page and hand its words to `sink`. Returns the word count.
    pub fn process_page<S: WordSink>(
        &self,
        page: usize,
        fragments: Vec<TextFragment>,
        sink: &mut S,
    ) -> Result<usize> {
        let fragment_count = fragments.len();
        let mut words = 0;
        for word in reconstruct_words(fragments, &self.config) {
            sink.accept(page, word)?;
            words += 1;
        }
        debug!(page, fragments = fragment_count, words, "page reconstructed");
        Ok(words)
    }

    /// Process every page of `source` in order.
    pub fn run<F, S>(&self, source: &mut F, sink: &mut S) -> Result<DocumentSummary>
    where
        F: FragmentSource + ?Sized,
        S: WordSink,
    {
        self.config.validate()?;

        let mut summary = DocumentSummary {
            pages: source.page_count(),
            ..DocumentSummary::default()
        };

        for page in 1..=summary.pages {
            if self.cancelled() {
                info!(page, "cancellation requested, stopping");
                return Err(Error::Cancelled { page });
            }

            match source.page_fragments(page) {
                Ok(Some(fragments)) => {
                    summary.words += self.process_page(page, fragments, sink)?;
                    summary.pages_processed += 1;
                }
                Ok(None) => {
                    debug!(page, "null page, skipping");
                    summary.empty_pages += 1;
                }
                Err(err) => match self.policy {
                    PageErrorPolicy::Abort => return Err(err),
                    PageErrorPolicy::Skip => {
                        warn!(page, error = %err, "failed to decode page, skipping");
                        summary.failed_pages.push(page);
                    }
                },
            }
        }

        sink.finish()?;
        info!(
            pages = summary.pages,
            words = summary.words,
            empty = summary.empty_pages,
            failed = summary.failed_pages.len(),
            "document processed"
        );
        Ok(summary)
    }
}
