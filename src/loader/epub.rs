//! EPUB extraction via the `epub` crate.
//!
//! The reading order comes from the spine; each document-item becomes one
//! text unit. The view renders plain text rather than HTML, so chapter
//! markup is stripped with `html2text` at load time.

use anyhow::{Context, Result};
use epub::doc::EpubDoc;
use std::path::Path;
use tracing::{debug, warn};

/// Extract the metadata title and one text unit per spine item.
pub(super) fn load_pages(path: &Path) -> Result<(Option<String>, Vec<String>)> {
    let mut doc = EpubDoc::new(path)
        .with_context(|| format!("Failed to open EPUB at {}", path.display()))?;

    let title = doc.get_title();
    let mut pages = Vec::new();

    loop {
        if let Some((chapter, _mime)) = doc.get_current_str() {
            // Use a very large width so we do not bake in hard line breaks;
            // the UI handles wrapping. Fall back to the raw chapter on errors.
            let plain = match html2text::from_read(chapter.as_bytes(), 10_000) {
                Ok(clean) => clean,
                Err(err) => {
                    warn!(item = pages.len() + 1, "html2text failed: {err}");
                    chapter
                }
            };
            debug!(item = pages.len() + 1, chars = plain.len(), "Converted spine item");
            pages.push(plain);
        }

        if !doc.go_next() {
            break;
        }
    }

    Ok((title, pages))
}
