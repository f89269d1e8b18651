pub(crate) fn default_font_size() -> u32 {
    16
}

pub(crate) fn default_line_spacing() -> f32 {
    1.2
}

pub(crate) fn default_margin_horizontal() -> u16 {
    48
}

pub(crate) fn default_margin_vertical() -> u16 {
    16
}

pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    600.0
}

pub(crate) fn default_show_settings() -> bool {
    false
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_zoom_in() -> String {
    "=".to_string()
}

pub(crate) fn default_key_zoom_out() -> String {
    "-".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_toggle_settings() -> String {
    "ctrl+s".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
