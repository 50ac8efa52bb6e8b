use crate::portal::session::User;
use crate::portal::Language;
use crate::ui::i18n::LanguagePack;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_INDIGO};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top band: app name, tagline, language and the signed-in user.
pub struct Header<'a> {
    pack: &'static LanguagePack,
    language: Language,
    user: Option<&'a User>,
}

impl<'a> Header<'a> {
    pub fn new(language: Language, user: Option<&'a User>) -> Self {
        Self {
            pack: LanguagePack::for_language(language),
            language,
            user,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.pack.app_name,
                Style::default()
                    .fg(PORTAL_INDIGO)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.pack.tagline, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "{}: {}",
                    self.pack.selected_language,
                    self.language.native_name()
                ),
                text_style,
            ),
        ];
        if let Some(user) = self.user {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                user.name.clone(),
                text_style.add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("  [{} ^O]", self.pack.logout),
                Style::default().fg(PORTAL_INDIGO),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
