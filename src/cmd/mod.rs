pub mod pages;
pub mod words;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use tsundoku::{FragmentSource, InputKind, JsonFragmentSource};

/// Read an input file and classify it.
pub fn read_input(path: &Path) -> Result<(InputKind, Vec<u8>)> {
    let mut bytes = Vec::new();
    std::fs::File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .with_context(|| format!("failed to read {}", path.display()))?;

    let head = &bytes[..bytes.len().min(64)];
    let kind = InputKind::detect(path, head)?;
    tracing::debug!(path = %path.display(), mime = kind.mime_type(), bytes = bytes.len(), "input loaded");
    Ok((kind, bytes))
}

/// Open the right fragment source for `kind` and hand it to `f`.
pub fn with_source<T>(
    kind: InputKind,
    bytes: &[u8],
    f: impl FnOnce(&mut dyn FragmentSource) -> Result<T>,
) -> Result<T> {
    match kind {
        InputKind::Json => {
            let mut source = JsonFragmentSource::from_slice(bytes).context("invalid fragment dump")?;
            f(&mut source)
        }
        #[cfg(feature = "pdf")]
        InputKind::Pdf => {
            let pdfium = tsundoku::source::pdf::bind_system_pdfium()
                .context("pdfium library not found")?;
            let mut source = tsundoku::PdfFragmentSource::load(&pdfium, bytes)
                .context("failed to parse PDF")?;
            f(&mut source)
        }
        #[cfg(not(feature = "pdf"))]
        InputKind::Pdf => {
            anyhow::bail!("PDF input requires building with `--features pdf`")
        }
    }
}
