use std::path::PathBuf;

use anyhow::Result;

use super::{read_input, with_source};

pub async fn cmd_pages(file: PathBuf) -> Result<()> {
    let listing = tokio::task::spawn_blocking(move || -> Result<Vec<String>> {
        let (kind, bytes) = read_input(&file)?;
        with_source(kind, &bytes, |source| {
            let mut lines = Vec::with_capacity(source.page_count());
            for page in 1..=source.page_count() {
                let line = match source.page_fragments(page) {
                    Ok(Some(fragments)) => format!("page {page}: {} fragments", fragments.len()),
                    Ok(None) => format!("page {page}: empty"),
                    Err(e) => format!("page {page}: error: {e}"),
                };
                lines.push(line);
            }
            Ok(lines)
        })
    })
    .await??;

    for line in &listing {
        println!("{line}");
    }
    println!("\n({} pages)", listing.len());

    Ok(())
}
