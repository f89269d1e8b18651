//! PDF text extraction via `lopdf`.
//!
//! One text unit per physical page, walked in page order. A page whose
//! content streams cannot be decoded degrades to a placeholder instead of
//! failing the whole document.

use anyhow::{Context, Result};
use lopdf::Document as PdfDocument;
use std::path::Path;
use tracing::{debug, warn};

const EMPTY_PAGE_PLACEHOLDER: &str = "[Empty page]";

/// Extract the metadata title and one text unit per page.
pub(super) fn load_pages(path: &Path) -> Result<(Option<String>, Vec<String>)> {
    let doc = PdfDocument::load(path)
        .with_context(|| format!("Failed to open PDF at {}", path.display()))?;

    let title = info_title(&doc);
    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        let text = match doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(err) => {
                warn!(page = page_num, "Text extraction failed for page: {err}");
                String::new()
            }
        };
        debug!(page = page_num, chars = text.len(), "Extracted page text");
        if text.trim().is_empty() {
            pages.push(EMPTY_PAGE_PLACEHOLDER.to_string());
        } else {
            pages.push(text);
        }
    }

    Ok((title, pages))
}

/// Read the Title entry of the document information dictionary, if any.
fn info_title(doc: &PdfDocument) -> Option<String> {
    let info_ref = doc.trailer.get(b"Info").ok()?;
    let ref_id = info_ref.as_reference().ok()?;
    let lopdf::Object::Dictionary(info_dict) = doc.get_object(ref_id).ok()? else {
        return None;
    };

    match info_dict.get(b"Title").ok()? {
        lopdf::Object::String(bytes, _) => {
            // Try UTF-8 first, then Latin-1.
            String::from_utf8(bytes.clone())
                .ok()
                .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
        }
        _ => None,
    }
}
