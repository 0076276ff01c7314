// Detail page rendering.
// Shows one note in full: title, category badge, timestamp, and body.

use ratatui::{prelude::*, widgets::*};

use crate::github::Note;

use super::list::{format_timestamp, kind_color};

/// Render the detail page for the given note.
pub fn render_detail(frame: &mut Frame, note: &Note, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + badge
            Constraint::Min(1),    // Body
        ])
        .split(area);

    let color = kind_color(note.kind);
    let title = note.title.as_deref().unwrap_or("(no title)");

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", note.kind.label()),
                Style::default().fg(Color::Black).bg(color),
            ),
            Span::styled(
                format!(" {}", format_timestamp(&note.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]);
    frame.render_widget(header, chunks[0]);

    let body = Paragraph::new(note.content.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(body, chunks[1]);
}
