use super::super::state::{
    App, MAX_FONT_SIZE, MAX_HORIZONTAL_MARGIN, MAX_LINE_SPACING, MAX_VERTICAL_MARGIN,
    MIN_FONT_SIZE, MIN_LINE_SPACING,
};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_font_size_changed(&mut self, size: u32) {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped != self.config.font_size {
            debug!(
                old = self.config.font_size,
                new = clamped,
                "Font size changed"
            );
            self.config.font_size = clamped;
        }
    }

    pub(super) fn handle_zoom_in(&mut self) {
        self.handle_font_size_changed(self.config.font_size.saturating_add(1));
    }

    pub(super) fn handle_zoom_out(&mut self) {
        self.handle_font_size_changed(self.config.font_size.saturating_sub(1));
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        let next = match self.config.theme {
            crate::config::ThemeMode::Night => crate::config::ThemeMode::Day,
            crate::config::ThemeMode::Day => crate::config::ThemeMode::Night,
        };
        info!(
            night_mode = matches!(next, crate::config::ThemeMode::Night),
            "Toggled theme"
        );
        self.config.theme = next;
    }

    pub(super) fn handle_toggle_settings(&mut self) {
        debug!("Toggled settings panel");
        self.config.show_settings = !self.config.show_settings;
    }

    pub(super) fn handle_toggle_about(&mut self) {
        debug!("Toggled about panel");
        self.show_about = !self.show_about;
    }

    pub(super) fn handle_font_family_changed(&mut self, family: crate::config::FontFamily) {
        debug!(?family, "Font family changed");
        self.config.font_family = family;
    }

    pub(super) fn handle_font_weight_changed(&mut self, weight: crate::config::FontWeight) {
        debug!(?weight, "Font weight changed");
        self.config.font_weight = weight;
    }

    pub(super) fn handle_line_spacing_changed(&mut self, spacing: f32) {
        self.config.line_spacing = spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
        debug!(
            line_spacing = self.config.line_spacing,
            "Line spacing changed"
        );
    }

    pub(super) fn handle_margin_horizontal_changed(&mut self, margin: u16) {
        self.config.margin_horizontal = margin.min(MAX_HORIZONTAL_MARGIN);
        debug!(
            margin_horizontal = self.config.margin_horizontal,
            "Horizontal margin changed"
        );
    }

    pub(super) fn handle_margin_vertical_changed(&mut self, margin: u16) {
        self.config.margin_vertical = margin.min(MAX_VERTICAL_MARGIN);
        debug!(
            margin_vertical = self.config.margin_vertical,
            "Vertical margin changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ThemeMode};

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(None, AppConfig::default());
        app
    }

    #[test]
    fn font_size_is_clamped_to_bounds() {
        let mut app = build_test_app();
        app.handle_font_size_changed(100);
        assert_eq!(app.config.font_size, MAX_FONT_SIZE);
        app.handle_font_size_changed(1);
        assert_eq!(app.config.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn zoom_in_stops_at_the_maximum() {
        let mut app = build_test_app();
        app.config.font_size = MAX_FONT_SIZE;
        app.handle_zoom_in();
        assert_eq!(app.config.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn zoom_out_stops_at_the_minimum() {
        let mut app = build_test_app();
        app.config.font_size = MIN_FONT_SIZE;
        app.handle_zoom_out();
        assert_eq!(app.config.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn zoom_steps_by_one_point() {
        let mut app = build_test_app();
        app.config.font_size = 16;
        app.handle_zoom_in();
        assert_eq!(app.config.font_size, 17);
        app.handle_zoom_out();
        app.handle_zoom_out();
        assert_eq!(app.config.font_size, 15);
    }

    #[test]
    fn theme_toggles_between_day_and_night() {
        let mut app = build_test_app();
        let initial = app.config.theme;
        app.handle_toggle_theme();
        assert_ne!(app.config.theme, initial);
        app.handle_toggle_theme();
        assert_eq!(app.config.theme, initial);
    }

    #[test]
    fn night_theme_is_reachable_from_default() {
        let mut app = build_test_app();
        if matches!(app.config.theme, ThemeMode::Day) {
            app.handle_toggle_theme();
        }
        assert_eq!(app.config.theme, ThemeMode::Night);
    }

    #[test]
    fn line_spacing_is_clamped() {
        let mut app = build_test_app();
        app.handle_line_spacing_changed(10.0);
        assert_eq!(app.config.line_spacing, MAX_LINE_SPACING);
        app.handle_line_spacing_changed(0.1);
        assert_eq!(app.config.line_spacing, MIN_LINE_SPACING);
    }

    #[test]
    fn margins_are_capped() {
        let mut app = build_test_app();
        app.handle_margin_horizontal_changed(u16::MAX);
        assert_eq!(app.config.margin_horizontal, MAX_HORIZONTAL_MARGIN);
        app.handle_margin_vertical_changed(u16::MAX);
        assert_eq!(app.config.margin_vertical, MAX_VERTICAL_MARGIN);
    }
}
