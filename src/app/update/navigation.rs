use super::super::state::App;
use super::Effect;
use tracing::debug;

impl App {
    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.go_to_page(self.reader.current_page + 1));
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        if self.reader.current_page > 0 {
            effects.extend(self.go_to_page(self.reader.current_page - 1));
        }
    }

    pub(super) fn handle_page_input_changed(&mut self, value: String) {
        self.page_input = value;
    }

    /// Jump to the 1-based page number typed into the toolbar. Out-of-range
    /// values clamp; anything non-numeric is ignored.
    pub(super) fn handle_page_input_submitted(&mut self, effects: &mut Vec<Effect>) {
        let Ok(requested) = self.page_input.trim().parse::<usize>() else {
            debug!(input = %self.page_input, "Ignoring non-numeric page input");
            return;
        };
        effects.extend(self.go_to_page(requested.saturating_sub(1)));
        self.page_input.clear();
    }

    fn go_to_page(&mut self, new_page: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        let count = self.reader.page_count();
        if count == 0 {
            return effects;
        }

        let clamped = new_page.min(count - 1);
        if clamped != self.reader.current_page {
            self.reader.current_page = clamped;
            tracing::info!(page = self.reader.current_page + 1, "Navigated to page");
            effects.push(Effect::ScrollToTop);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::loader::{Document, DocumentKind};
    use std::path::PathBuf;

    fn build_test_app(pages: usize) -> App {
        let (mut app, _task) = App::bootstrap(None, AppConfig::default());
        app.apply_loaded_document(Document {
            kind: DocumentKind::Pdf,
            path: PathBuf::from("/tmp/folio-navigation-test.pdf"),
            title: "Navigation Test".to_string(),
            pages: (0..pages).map(|i| format!("Page body {i}")).collect(),
        });
        app
    }

    #[test]
    fn next_page_advances_and_scrolls_to_top() {
        let mut app = build_test_app(3);
        let mut effects = Vec::new();
        app.handle_next_page(&mut effects);
        assert_eq!(app.reader.current_page, 1);
        assert!(matches!(effects.as_slice(), [Effect::ScrollToTop]));
    }

    #[test]
    fn next_page_at_the_end_is_a_no_op() {
        let mut app = build_test_app(2);
        app.reader.set_page_clamped(1);
        let mut effects = Vec::new();
        app.handle_next_page(&mut effects);
        assert_eq!(app.reader.current_page, 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn previous_page_at_the_start_is_a_no_op() {
        let mut app = build_test_app(2);
        let mut effects = Vec::new();
        app.handle_previous_page(&mut effects);
        assert_eq!(app.reader.current_page, 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn navigation_without_a_document_does_nothing() {
        let (mut app, _task) = App::bootstrap(None, AppConfig::default());
        let mut effects = Vec::new();
        app.handle_next_page(&mut effects);
        assert_eq!(app.reader.current_page, 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn page_input_jumps_to_the_requested_page() {
        let mut app = build_test_app(10);
        app.handle_page_input_changed("7".to_string());
        let mut effects = Vec::new();
        app.handle_page_input_submitted(&mut effects);
        assert_eq!(app.reader.current_page, 6);
        assert!(app.page_input.is_empty());
    }

    #[test]
    fn out_of_range_page_input_clamps_to_the_last_page() {
        let mut app = build_test_app(4);
        app.handle_page_input_changed("999".to_string());
        let mut effects = Vec::new();
        app.handle_page_input_submitted(&mut effects);
        assert_eq!(app.reader.current_page, 3);
    }

    #[test]
    fn zero_page_input_clamps_to_the_first_page() {
        let mut app = build_test_app(4);
        app.reader.set_page_clamped(2);
        app.handle_page_input_changed("0".to_string());
        let mut effects = Vec::new();
        app.handle_page_input_submitted(&mut effects);
        assert_eq!(app.reader.current_page, 0);
    }

    #[test]
    fn non_numeric_page_input_is_ignored() {
        let mut app = build_test_app(4);
        app.reader.set_page_clamped(2);
        app.handle_page_input_changed("seven".to_string());
        let mut effects = Vec::new();
        app.handle_page_input_submitted(&mut effects);
        assert_eq!(app.reader.current_page, 2);
        assert!(effects.is_empty());
        assert_eq!(app.page_input, "seven");
    }
}
