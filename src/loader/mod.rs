//! Document loading.
//!
//! This module is the format boundary: it decides by extension whether a
//! path is a PDF or an EPUB, hands the file to the matching extraction
//! routine, and normalizes the result into an ordered, never-empty page
//! sequence. All actual parsing lives in third-party crates.

mod epub;
mod pdf;

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::info;

/// Supported document container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Epub,
}

impl DocumentKind {
    /// Detect the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "epub" => Some(DocumentKind::Epub),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Epub => "EPUB",
        };
        write!(f, "{}", label)
    }
}

/// A loaded document: an ordered sequence of displayable text units.
///
/// `pages` is never empty; loading substitutes a placeholder unit when
/// extraction yields nothing.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub title: String,
    pub pages: Vec<String>,
}

/// Open the file at `path` and extract its page sequence.
///
/// Fails on unsupported extensions and on files the format crates cannot
/// parse; the caller keeps whatever it was showing before.
pub fn load_document(path: &Path) -> Result<Document> {
    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        anyhow!(
            "Unsupported file type: {} (only PDF and EPUB are supported)",
            path.display()
        )
    })?;

    let (meta_title, pages) = match kind {
        DocumentKind::Pdf => pdf::load_pages(path)?,
        DocumentKind::Epub => epub::load_pages(path)?,
    };

    let title = resolve_title(meta_title, path);
    let pages = ensure_non_empty(pages, kind);

    info!(
        path = %path.display(),
        %kind,
        %title,
        pages = pages.len(),
        "Finished loading document"
    );

    Ok(Document {
        kind,
        path: path.to_path_buf(),
        title,
        pages,
    })
}

/// Prefer the embedded metadata title; fall back to the file name.
fn resolve_title(meta_title: Option<String>, path: &Path) -> String {
    meta_title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
}

fn ensure_non_empty(mut pages: Vec<String>, kind: DocumentKind) -> Vec<String> {
    if pages.is_empty() {
        pages.push(match kind {
            DocumentKind::Pdf => "This PDF appears to contain no extractable text.".to_string(),
            DocumentKind::Epub => "No readable content found in this EPUB.".to_string(),
        });
    }
    pages
}
