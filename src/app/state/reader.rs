use crate::loader::Document;

/// Reader-related model.
pub struct ReaderState {
    pub(in crate::app) document: Option<Document>,
    pub(in crate::app) current_page: usize,
}

impl ReaderState {
    pub(in crate::app) fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map(|document| document.pages.len())
            .unwrap_or(0)
    }

    pub(in crate::app) fn current_page_text(&self) -> &str {
        self.document
            .as_ref()
            .and_then(|document| document.pages.get(self.current_page))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub(in crate::app) fn set_page_clamped(&mut self, page: usize) {
        let count = self.page_count();
        if count == 0 {
            self.current_page = 0;
        } else {
            self.current_page = page.min(count - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DocumentKind;
    use std::path::PathBuf;

    fn reader_with_pages(pages: usize) -> ReaderState {
        ReaderState {
            document: Some(Document {
                kind: DocumentKind::Epub,
                path: PathBuf::from("/tmp/folio-reader-test.epub"),
                title: "Reader Test".to_string(),
                pages: (0..pages).map(|i| format!("Unit {i}")).collect(),
            }),
            current_page: 0,
        }
    }

    #[test]
    fn set_page_clamps_to_last_page() {
        let mut reader = reader_with_pages(3);
        reader.set_page_clamped(99);
        assert_eq!(reader.current_page, 2);
    }

    #[test]
    fn set_page_with_no_document_stays_at_zero() {
        let mut reader = ReaderState {
            document: None,
            current_page: 0,
        };
        reader.set_page_clamped(7);
        assert_eq!(reader.current_page, 0);
        assert_eq!(reader.current_page_text(), "");
    }

    #[test]
    fn current_page_text_tracks_the_cursor() {
        let mut reader = reader_with_pages(2);
        assert_eq!(reader.current_page_text(), "Unit 0");
        reader.set_page_clamped(1);
        assert_eq!(reader.current_page_text(), "Unit 1");
    }
}
