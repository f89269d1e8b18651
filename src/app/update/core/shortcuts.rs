use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::PageDown) => "pagedown".to_string(),
            Key::Named(key::Named::PageUp) => "pageup".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_next_page, "right", &pressed, modifiers) {
            Some(Message::NextPage)
        } else if Self::shortcut_matches(&self.config.key_prev_page, "left", &pressed, modifiers) {
            Some(Message::PreviousPage)
        } else if Self::shortcut_matches(&self.config.key_zoom_in, "=", &pressed, modifiers) {
            Some(Message::ZoomIn)
        } else if Self::shortcut_matches(&self.config.key_zoom_out, "-", &pressed, modifiers) {
            Some(Message::ZoomOut)
        } else if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_settings,
            "ctrl+s",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleSettings)
        } else if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::Quit)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(None, AppConfig::default());
        app
    }

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn matches_plain_key_without_modifiers() {
        assert!(App::shortcut_matches("q", "x", "q", Modifiers::empty()));
    }

    #[test]
    fn matches_ctrl_combination() {
        assert!(App::shortcut_matches("ctrl+s", "x", "s", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+s",
            "x",
            "s",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn arrow_keys_map_to_page_navigation() {
        let app = build_test_app();
        let next = app.shortcut_message_for_key(
            Key::Named(key::Named::ArrowRight),
            Modifiers::empty(),
        );
        assert!(matches!(next, Some(Message::NextPage)));

        let prev = app.shortcut_message_for_key(
            Key::Named(key::Named::ArrowLeft),
            Modifiers::empty(),
        );
        assert!(matches!(prev, Some(Message::PreviousPage)));
    }

    #[test]
    fn unbound_keys_produce_no_message() {
        let app = build_test_app();
        let message =
            app.shortcut_message_for_key(Key::Character("z".into()), Modifiers::empty());
        assert!(message.is_none());
    }

    #[test]
    fn rebound_quit_key_is_honored() {
        let (mut app, _task) = App::bootstrap(None, AppConfig::default());
        app.config.key_quit = "ctrl+w".to_string();

        let old = app.shortcut_message_for_key(Key::Character("q".into()), Modifiers::empty());
        assert!(old.is_none());

        let new = app.shortcut_message_for_key(Key::Character("w".into()), Modifiers::CTRL);
        assert!(matches!(new, Some(Message::Quit)));
    }
}
