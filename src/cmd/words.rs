use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use tsundoku::{
    DocumentSummary, GeometryAttribution, JsonLinesSink, LogSink, PageDriver, PageErrorPolicy,
    Settings, TextSink,
};

use super::{read_input, with_source};
use crate::OutputFormat;

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub gap_threshold: Option<f64>,
    pub baseline_tolerance: Option<f64>,
    pub geometry: Option<GeometryAttribution>,
    pub skip_failed_pages: bool,
}

/// Merge overrides into settings and build the driver.
fn build_driver(mut settings: Settings, overrides: Overrides) -> Result<PageDriver> {
    if let Some(gap) = overrides.gap_threshold {
        settings.layout.gap_threshold = gap;
    }
    if let Some(tolerance) = overrides.baseline_tolerance {
        settings.layout.baseline_tolerance = tolerance;
    }
    if let Some(geometry) = overrides.geometry {
        settings.layout.geometry = geometry;
    }
    if overrides.skip_failed_pages {
        settings.pages.on_error = PageErrorPolicy::Skip;
    }
    settings.layout.validate()?;

    Ok(PageDriver::new(settings.layout).with_policy(settings.pages.on_error))
}

pub async fn cmd_words(
    file: PathBuf,
    format: OutputFormat,
    settings: Settings,
    overrides: Overrides,
) -> Result<()> {
    let cancel = Arc::new(AtomicBool::new(false));
    let driver = build_driver(settings, overrides)?.with_cancellation(Arc::clone(&cancel));

    // Stop at the next page boundary on Ctrl-C
    let signal = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, finishing current page");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    // Reconstruction is synchronous and may sit on pdfium FFI for a while
    let summary = tokio::task::spawn_blocking(move || -> Result<DocumentSummary> {
        let (kind, bytes) = read_input(&file)?;
        with_source(kind, &bytes, |source| {
            let summary = match format {
                OutputFormat::Text => {
                    driver.run(source, &mut TextSink::new(std::io::stdout().lock()))?
                }
                OutputFormat::Json => {
                    driver.run(source, &mut JsonLinesSink::new(std::io::stdout().lock()))?
                }
                OutputFormat::Log => driver.run(source, &mut LogSink)?,
            };
            Ok(summary)
        })
        .with_context(|| format!("failed to process {}", file.display()))
    })
    .await??;

    signal.abort();

    if !summary.failed_pages.is_empty() {
        warn!(pages = ?summary.failed_pages, "some pages could not be decoded");
    }

    Ok(())
}
