use crate::portal::intake::{Complaint, ComplaintStatus, Priority};
use crate::portal::PortalController;
use crate::ui::i18n::LanguagePack;
use crate::ui::theme::{
    priority_color, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_INDIGO,
    STATUS_OK, STATUS_PENDING,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw_dashboard(frame: &mut Frame<'_>, area: Rect, portal: &PortalController) {
    let pack = LanguagePack::for_language(portal.language());
    let [intake, history] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    draw_intake(frame, intake, portal, pack);
    draw_history(frame, history, portal, pack);
}

fn draw_intake(
    frame: &mut Frame<'_>,
    area: Rect,
    portal: &PortalController,
    pack: &'static LanguagePack,
) {
    let [title, subtitle, editor, button, banner] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            pack.title,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            pack.subtitle,
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .wrap(Wrap { trim: true }),
        subtitle,
    );

    let draft = portal.draft();
    let editor_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER))
        .title(Span::styled(pack.complaint, Style::default().fg(HEADER_TEXT)));
    let editor_text = if draft.is_empty() {
        Paragraph::new(Span::styled(
            pack.complaint,
            Style::default()
                .fg(HEADER_SEPARATOR)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Paragraph::new(draft.to_string()).wrap(Wrap { trim: false })
    };
    frame.render_widget(editor_text.block(editor_block), editor);
    if draft.is_empty() && editor.width > 2 && editor.height > 2 {
        frame.set_cursor_position((editor.x + 1, editor.y + 1));
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[ {} ⏎ ]", pack.submit),
            Style::default()
                .fg(PORTAL_INDIGO)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        button,
    );

    if let Some(priority) = portal.banner() {
        frame.render_widget(banner_widget(priority, pack), banner);
    }
}

fn banner_widget(priority: Priority, pack: &'static LanguagePack) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("✅ Complaint categorized as: ", Style::default().fg(STATUS_OK)),
        Span::styled(
            priority.label().to_uppercase(),
            Style::default()
                .fg(priority_color(priority))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", pack.priority), Style::default().fg(STATUS_OK)),
    ]);
    Paragraph::new(line).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_OK)),
    )
}

fn draw_history(
    frame: &mut Frame<'_>,
    area: Rect,
    portal: &PortalController,
    pack: &'static LanguagePack,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(
            pack.my_complaints,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    let complaints = portal.complaints();
    let lines: Vec<Line<'static>> = if complaints.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No complaints submitted yet",
                Style::default().fg(HEADER_SEPARATOR),
            ))
            .centered(),
        ]
    } else {
        complaints
            .iter()
            .flat_map(|complaint| complaint_lines(complaint, pack))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn complaint_lines(complaint: &Complaint, pack: &'static LanguagePack) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", complaint.priority.label()),
            Style::default()
                .fg(priority_color(complaint.priority))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Span::raw("  "),
        Span::styled(complaint.date.clone(), Style::default().fg(HEADER_SEPARATOR)),
    ])];
    lines.extend(
        complaint
            .text
            .lines()
            .map(|text| Line::from(Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)))),
    );
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", pack.status),
            Style::default().fg(HEADER_SEPARATOR),
        ),
        status_span(complaint.status, pack),
    ]));
    lines.push(Line::from(""));
    lines
}

fn status_span(status: ComplaintStatus, pack: &'static LanguagePack) -> Span<'static> {
    match status {
        ComplaintStatus::Pending => Span::styled(pack.pending, Style::default().fg(STATUS_PENDING)),
    }
}
