use crate::portal::session::Page;
use crate::portal::PortalController;

/// Terminal-side wrapper around the portal controller.
///
/// Holds what only the terminal cares about (quit flag, screen size) and
/// turns raw text input into edits of the focused field.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    portal: PortalController,
}

impl App {
    pub fn new(portal: PortalController) -> Self {
        Self {
            should_quit: false,
            size: None,
            portal,
        }
    }

    pub fn portal(&self) -> &PortalController {
        &self.portal
    }

    pub fn portal_mut(&mut self) -> &mut PortalController {
        &mut self.portal
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_banner_expired(&mut self, generation: u64) {
        if self.portal.expire_banner(generation) {
            tracing::trace!(generation, "banner cleared");
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut value = self.portal.focused_value().to_string();
        value.push(ch);
        self.portal.set_focused_value(value);
    }

    pub fn backspace(&mut self) {
        let mut value = self.portal.focused_value().to_string();
        if value.pop().is_some() {
            self.portal.set_focused_value(value);
        }
    }

    /// Paste into the focused field. Form fields are single-line, so line
    /// breaks are dropped there; the complaint box keeps them.
    pub fn on_paste(&mut self, text: &str) {
        let mut value = self.portal.focused_value().to_string();
        if self.portal.current_page() == Page::Dashboard {
            value.push_str(text);
        } else {
            value.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
        }
        self.portal.set_focused_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::Language;
    use std::time::Duration;

    fn make_app() -> App {
        App::new(PortalController::new(Language::En, Duration::from_secs(5)))
    }

    #[test]
    fn typing_fills_focused_login_field() {
        let mut app = make_app();
        for ch in "a@b".chars() {
            app.insert_char(ch);
        }
        app.backspace();
        assert_eq!(app.portal().forms().login.email, "a@");
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut app = make_app();
        app.backspace();
        assert_eq!(app.portal().forms().login.email, "");
    }

    #[test]
    fn paste_strips_newlines_in_forms() {
        let mut app = make_app();
        app.on_paste("user@example.com\n");
        assert_eq!(app.portal().forms().login.email, "user@example.com");
    }

    #[test]
    fn paste_keeps_newlines_in_complaint() {
        let mut app = make_app();
        app.portal_mut()
            .login("user@example.com", "secret")
            .expect("login accepted");
        app.on_paste("line one\nline two");
        assert_eq!(app.portal().draft(), "line one\nline two");
    }

    #[test]
    fn resize_is_recorded() {
        let mut app = make_app();
        app.on_resize(100, 40);
        assert_eq!(app.size(), Some((100, 40)));
    }
}
