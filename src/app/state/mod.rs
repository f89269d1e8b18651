mod constants;
mod reader;

use crate::config::{AppConfig, FontFamily, FontWeight, ThemeMode};
use crate::loader::Document;
use iced::font::{Family, Weight};
use iced::{Font, Task};
use std::path::PathBuf;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use reader::ReaderState;

/// Core application state composed of the reader model and window chrome.
pub struct App {
    pub(super) reader: ReaderState,
    pub(super) config: AppConfig,
    pub(super) open_path_input: String,
    pub(super) page_input: String,
    pub(super) document_loading: bool,
    pub(super) load_error: Option<String>,
    pub(super) show_about: bool,
}

impl App {
    pub(super) fn bootstrap(initial: Option<PathBuf>, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let app = App {
            reader: ReaderState {
                document: None,
                current_page: 0,
            },
            config,
            open_path_input: String::new(),
            page_input: String::new(),
            document_loading: false,
            load_error: None,
            show_about: false,
        };

        tracing::info!(
            font_size = app.config.font_size,
            night_mode = matches!(app.config.theme, ThemeMode::Night),
            "Initialized app state"
        );

        let init_task = match initial {
            Some(path) => Task::done(Message::OpenFileRequested(path)),
            None => Task::none(),
        };
        (app, init_task)
    }

    /// Install a freshly loaded document and reset the reading cursor.
    pub(super) fn apply_loaded_document(&mut self, document: Document) {
        self.document_loading = false;
        self.load_error = None;
        self.open_path_input.clear();
        self.page_input.clear();
        self.show_about = false;

        tracing::info!(
            path = %document.path.display(),
            kind = %document.kind,
            title = %document.title,
            pages = document.pages.len(),
            "Loaded document into reader state"
        );

        self.reader.document = Some(document);
        self.reader.set_page_clamped(0);
    }

    pub(super) fn current_font(&self) -> Font {
        let family = match self.config.font_family {
            FontFamily::Sans => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
        };

        Font {
            family,
            weight: self.config.font_weight.to_weight(),
            ..Font::DEFAULT
        }
    }

    pub(super) fn status_line(&self) -> String {
        match &self.reader.document {
            Some(document) => format!(
                "{}  |  Page {} of {}",
                document.title,
                self.reader.current_page + 1,
                document.pages.len()
            ),
            None => String::from("No document loaded"),
        }
    }
}

impl FontWeight {
    pub(super) fn to_weight(self) -> Weight {
        match self {
            FontWeight::Light => Weight::Light,
            FontWeight::Normal => Weight::Normal,
            FontWeight::Bold => Weight::Bold,
        }
    }
}

pub(super) fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized;
        }
    }

    config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.line_spacing = config.line_spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
    config.margin_horizontal = config.margin_horizontal.min(MAX_HORIZONTAL_MARGIN);
    config.margin_vertical = config.margin_vertical.min(MAX_VERTICAL_MARGIN);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    normalize_key_binding(&mut config.key_next_page, "right");
    normalize_key_binding(&mut config.key_prev_page, "left");
    normalize_key_binding(&mut config.key_zoom_in, "=");
    normalize_key_binding(&mut config.key_zoom_out, "-");
    normalize_key_binding(&mut config.key_toggle_theme, "t");
    normalize_key_binding(&mut config.key_toggle_settings, "ctrl+s");
    normalize_key_binding(&mut config.key_quit, "q");
}
