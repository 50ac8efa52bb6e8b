use crate::portal::form::{LoginField, RegisterField};
use crate::portal::session::Page;
use crate::portal::PortalController;
use crate::ui::app::App;
use crate::ui::dashboard::draw_dashboard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::i18n::LanguagePack;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_INDIGO, STATUS_ERROR,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FORM_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let portal = app.portal();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new(portal.language(), portal.user()).widget(),
        header,
    );
    frame.render_widget(Clear, body);
    match portal.current_page() {
        Page::Login => draw_login(frame, body, portal),
        Page::Register => draw_register(frame, body, portal),
        Page::Dashboard => draw_dashboard(frame, body, portal),
    }
    frame.render_widget(
        Footer::new(
            portal.current_page(),
            LanguagePack::for_language(portal.language()),
        )
        .widget(footer),
        footer,
    );
}

/// One labelled input box on a form.
struct FieldView<'a> {
    label: &'static str,
    value: &'a str,
    secret: bool,
    focused: bool,
}

struct FormView<'a> {
    heading: &'static str,
    fields: Vec<FieldView<'a>>,
    error: Option<&'a str>,
    primary: &'static str,
    prompt: &'static str,
    link: &'static str,
    show_password: bool,
}

fn draw_login(frame: &mut Frame<'_>, area: Rect, portal: &PortalController) {
    let pack = LanguagePack::for_language(portal.language());
    let forms = portal.forms();
    let focused = portal.focused_login_field();
    let fields = LoginField::ALL
        .iter()
        .map(|&field| FieldView {
            label: match field {
                LoginField::Email => pack.email,
                LoginField::Password => pack.password,
            },
            value: forms.login.get(field),
            secret: field.is_secret(),
            focused: focused == Some(field),
        })
        .collect();

    draw_form(
        frame,
        area,
        FormView {
            heading: pack.welcome,
            fields,
            error: forms.error(),
            primary: pack.sign_in,
            prompt: pack.no_account,
            link: pack.sign_up,
            show_password: forms.show_password,
        },
    );
}

fn draw_register(frame: &mut Frame<'_>, area: Rect, portal: &PortalController) {
    let pack = LanguagePack::for_language(portal.language());
    let forms = portal.forms();
    let focused = portal.focused_register_field();
    let fields = RegisterField::ALL
        .iter()
        .map(|&field| FieldView {
            label: match field {
                RegisterField::Name => pack.full_name,
                RegisterField::Email => pack.email,
                RegisterField::Password => pack.password,
                RegisterField::ConfirmPassword => pack.confirm_password,
            },
            value: forms.register.get(field),
            secret: field.is_secret(),
            focused: focused == Some(field),
        })
        .collect();

    draw_form(
        frame,
        area,
        FormView {
            heading: pack.create_account,
            fields,
            error: forms.error(),
            primary: pack.sign_up,
            prompt: pack.have_account,
            link: pack.sign_in,
            show_password: forms.show_password,
        },
    );
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, view: FormView<'_>) {
    let error_height = if view.error.is_some() { 2 } else { 0 };
    let fields_height = view.fields.len() as u16 * 3;
    // heading + gap + error + fields + gap + button + prompt, plus borders
    let card_height = 2 + 2 + error_height + fields_height + 1 + 1 + 1;
    let card = centered_rect_by_size(area, FORM_WIDTH, card_height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints = vec![Constraint::Length(2)];
    if view.error.is_some() {
        constraints.push(Constraint::Length(2));
    }
    constraints.extend(view.fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);
    let mut row = rows.iter().copied();

    if let Some(heading_area) = row.next() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                view.heading,
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );
    }

    if let Some(error) = view.error {
        if let Some(error_area) = row.next() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("⚠ ", Style::default().fg(STATUS_ERROR)),
                    Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)),
                ])),
                error_area,
            );
        }
    }

    for field in &view.fields {
        let Some(field_area) = row.next() else {
            break;
        };
        let shown = if field.secret && !view.show_password {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.to_string()
        };
        let border = if field.focused {
            FOCUS_BORDER
        } else {
            GLOBAL_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(field.label, Style::default().fg(HEADER_TEXT)));
        let cursor_offset = Span::raw(shown.as_str()).width() as u16;
        frame.render_widget(Paragraph::new(shown).block(block), field_area);

        if field.focused && field_area.width > 2 && field_area.height > 2 {
            let x = field_area.x + 1 + cursor_offset.min(field_area.width - 3);
            frame.set_cursor_position((x, field_area.y + 1));
        }
    }

    let _gap = row.next();
    if let Some(button_area) = row.next() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("[ {} ⏎ ]", view.primary),
                Style::default()
                    .fg(PORTAL_INDIGO)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            button_area,
        );
    }
    if let Some(prompt_area) = row.next() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(view.prompt, Style::default().fg(HEADER_SEPARATOR)),
                Span::raw(" "),
                Span::styled(
                    format!("{} (Ctrl+R)", view.link),
                    Style::default().fg(PORTAL_INDIGO),
                ),
            ]))
            .centered(),
            prompt_area,
        );
    }
}
