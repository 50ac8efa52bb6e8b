use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::portal::session::{AuthPage, Page};
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'l') {
        let language = app.portal().language().next();
        app.portal_mut().set_language(language);
        return;
    }

    if is_ctrl_char(key, 'r') {
        let target = match app.portal().current_page() {
            Page::Login => AuthPage::Register,
            Page::Register => AuthPage::Login,
            Page::Dashboard => return,
        };
        app.portal_mut().switch_page(target);
        return;
    }

    if is_ctrl_char(key, 'o') {
        if app.portal().is_logged_in() {
            app.portal_mut().logout();
        }
        return;
    }

    if is_ctrl_char(key, 'p') {
        app.portal_mut().toggle_password_visibility();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.portal_mut().focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.portal_mut().focus_prev(),
        _ if is_line_break(key) && app.portal().current_page() == Page::Dashboard => {
            app.insert_char('\n');
        }
        KeyCode::Enter => app.portal_mut().submit_active_form(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(ch);
        }
        _ => {}
    }
}

/// Shift+Enter needs keyboard enhancement; Alt+Enter and Ctrl+J reach us
/// from any terminal.
fn is_line_break(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT),
        _ => is_ctrl_char(key, 'j'),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
