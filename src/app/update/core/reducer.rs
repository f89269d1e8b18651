use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::loader::DocumentKind;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenPathInputChanged(path) => self.open_path_input = path,
            Message::OpenPathSubmitted => self.handle_open_path_submitted(&mut effects),
            Message::OpenFileRequested(path) => {
                self.handle_open_file_requested(path, &mut effects)
            }
            Message::DocumentLoaded { path, document } => {
                self.handle_document_loaded(path, document, &mut effects)
            }
            Message::DocumentLoadFailed { path, error } => {
                self.handle_document_load_failed(path, error)
            }
            Message::DismissLoadError => self.load_error = None,
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::PageInputChanged(value) => self.handle_page_input_changed(value),
            Message::PageInputSubmitted => self.handle_page_input_submitted(&mut effects),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),
            Message::FontFamilyChanged(family) => self.handle_font_family_changed(family),
            Message::FontWeightChanged(weight) => self.handle_font_weight_changed(weight),
            Message::LineSpacingChanged(spacing) => self.handle_line_spacing_changed(spacing),
            Message::MarginHorizontalChanged(margin) => {
                self.handle_margin_horizontal_changed(margin)
            }
            Message::MarginVerticalChanged(margin) => self.handle_margin_vertical_changed(margin),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ToggleSettings => self.handle_toggle_settings(),
            Message::ToggleAbout => self.handle_toggle_about(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Quit => effects.push(Effect::Quit),
        }

        effects
    }

    fn handle_open_path_submitted(&mut self, effects: &mut Vec<Effect>) {
        if self.document_loading {
            return;
        }
        let candidate = PathBuf::from(self.open_path_input.trim());
        if candidate.as_os_str().is_empty() {
            return;
        }
        effects.extend(self.reduce(Message::OpenFileRequested(candidate)));
    }

    fn handle_open_file_requested(&mut self, path: PathBuf, effects: &mut Vec<Effect>) {
        if self.document_loading {
            return;
        }
        if DocumentKind::from_path(&path).is_none() {
            warn!(path = %path.display(), "Rejected unsupported file type");
            self.load_error = Some(format!(
                "Unsupported file type: {} (only PDF and EPUB are supported)",
                path.display()
            ));
            return;
        }

        self.document_loading = true;
        self.load_error = None;
        info!(path = %path.display(), "Opening document");
        effects.push(Effect::LoadDocument(path));
    }

    fn handle_document_loaded(
        &mut self,
        path: PathBuf,
        document: crate::loader::Document,
        effects: &mut Vec<Effect>,
    ) {
        self.apply_loaded_document(document);
        effects.push(Effect::ScrollToTop);
        info!(path = %path.display(), "Document ready");
    }

    fn handle_document_load_failed(&mut self, path: PathBuf, error: String) {
        self.document_loading = false;
        self.load_error = Some(format!("Failed to open {}: {}", path.display(), error));
        warn!(path = %path.display(), "Failed to load document: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::loader::Document;

    fn sample_document(pages: usize) -> Document {
        Document {
            kind: DocumentKind::Epub,
            path: PathBuf::from("/tmp/folio-reducer-test.epub"),
            title: "Reducer Test".to_string(),
            pages: (0..pages).map(|i| format!("Unit {i}")).collect(),
        }
    }

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(None, AppConfig::default());
        app
    }

    #[test]
    fn unsupported_extension_is_rejected_without_a_load() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::OpenFileRequested(PathBuf::from("/books/notes.txt")));
        assert!(effects.is_empty());
        let error = app.load_error.as_deref().expect("error message");
        assert!(error.contains("Unsupported file type"));
    }

    #[test]
    fn unsupported_extension_leaves_current_document_intact() {
        let mut app = build_test_app();
        app.apply_loaded_document(sample_document(3));
        app.reader.set_page_clamped(2);

        app.reduce(Message::OpenFileRequested(PathBuf::from("/books/notes.txt")));
        assert!(app.reader.document.is_some());
        assert_eq!(app.reader.current_page, 2);
    }

    #[test]
    fn supported_extension_dispatches_a_load_effect() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::OpenFileRequested(PathBuf::from("/books/novel.pdf")));
        assert!(matches!(effects.as_slice(), [Effect::LoadDocument(_)]));
        assert!(app.document_loading);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn open_requests_are_ignored_while_a_load_is_in_flight() {
        let mut app = build_test_app();
        app.reduce(Message::OpenFileRequested(PathBuf::from("/books/a.pdf")));
        let effects = app.reduce(Message::OpenFileRequested(PathBuf::from("/books/b.pdf")));
        assert!(effects.is_empty());
    }

    #[test]
    fn load_failure_keeps_the_previous_document() {
        let mut app = build_test_app();
        app.apply_loaded_document(sample_document(2));
        app.document_loading = true;

        app.reduce(Message::DocumentLoadFailed {
            path: PathBuf::from("/books/broken.epub"),
            error: "corrupt container".to_string(),
        });

        assert!(!app.document_loading);
        assert!(app.load_error.as_deref().unwrap().contains("broken.epub"));
        assert!(app.reader.document.is_some());
    }

    #[test]
    fn successful_load_replaces_document_and_scrolls_to_top() {
        let mut app = build_test_app();
        app.apply_loaded_document(sample_document(5));
        app.reader.set_page_clamped(4);
        app.document_loading = true;

        let replacement = sample_document(2);
        let effects = app.reduce(Message::DocumentLoaded {
            path: replacement.path.clone(),
            document: replacement,
        });

        assert!(matches!(effects.as_slice(), [Effect::ScrollToTop]));
        assert_eq!(app.reader.current_page, 0);
        assert_eq!(app.reader.page_count(), 2);
    }

    #[test]
    fn blank_open_input_is_ignored() {
        let mut app = build_test_app();
        app.open_path_input = "   ".to_string();
        let effects = app.reduce(Message::OpenPathSubmitted);
        assert!(effects.is_empty());
        assert!(app.load_error.is_none());
    }
}
