use crate::portal::session::Page;
use crate::ui::i18n::LanguagePack;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    page: Page,
    pack: &'static LanguagePack,
}

impl Footer {
    pub fn new(page: Page, pack: &'static LanguagePack) -> Self {
        Self { page, pack }
    }

    /// Key hints for the current page, with action names in the selected
    /// language.
    pub fn hints(&self) -> String {
        let pack = self.pack;
        match self.page {
            Page::Login => format!(
                " Tab: Next │ Enter: {} │ Ctrl+R: {} │ Ctrl+P: Show Password │ Ctrl+L: Language │ Ctrl+Q: Quit",
                pack.login, pack.register
            ),
            Page::Register => format!(
                " Tab: Next │ Enter: {} │ Ctrl+R: {} │ Ctrl+P: Show Password │ Ctrl+L: Language │ Ctrl+Q: Quit",
                pack.register, pack.login
            ),
            Page::Dashboard => format!(
                " Enter: Submit │ Alt+Enter/Ctrl+J: New Line │ Ctrl+O: {} │ Ctrl+L: Language │ Ctrl+Q: Quit",
                pack.logout
            ),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Display width, not char count: Devanagari labels carry combining marks
        let hints_width = Span::raw(hints.as_str()).width();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::Language;

    #[test]
    fn dashboard_hints_name_logout_and_line_break() {
        let footer = Footer::new(Page::Dashboard, LanguagePack::for_language(Language::En));
        let hints = footer.hints();
        assert!(hints.contains("Ctrl+O: Logout"));
        assert!(hints.contains("Ctrl+J"));
    }

    #[test]
    fn hints_follow_language() {
        let pack = LanguagePack::for_language(Language::Hi);
        let hints = Footer::new(Page::Login, pack).hints();
        assert!(hints.contains(pack.register));
        assert!(hints.contains(pack.login));
    }
}
