// Compose page rendering.
// Input fields for title, content, and an optional image attachment, plus
// the recipient category selector.

use ratatui::{prelude::*, widgets::*};

use crate::state::{ComposeField, ComposeState};

use super::list::kind_color;

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", title))
}

fn input_line(value: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Render the compose page.
pub fn render_compose(frame: &mut Frame, compose: &ComposeState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Min(5),    // Content input
            Constraint::Length(3), // Image path input
            Constraint::Length(1), // Category selector
        ])
        .split(area);

    let title_focused = compose.focus == ComposeField::Title;
    let title = Paragraph::new(input_line(&compose.title, title_focused))
        .block(field_block("Title (optional)", title_focused));
    frame.render_widget(title, chunks[0]);

    let content_focused = compose.focus == ComposeField::Content;
    let content = Paragraph::new(input_line(&compose.content, content_focused))
        .wrap(Wrap { trim: false })
        .block(field_block("Content", content_focused));
    frame.render_widget(content, chunks[1]);

    let image_focused = compose.focus == ComposeField::Image;
    let image = Paragraph::new(input_line(&compose.image_path, image_focused))
        .block(field_block("Image path (optional)", image_focused));
    frame.render_widget(image, chunks[2]);

    let selector = Paragraph::new(Line::from(vec![
        Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", compose.kind.label()),
            Style::default().fg(Color::Black).bg(kind_color(compose.kind)),
        ),
        Span::styled("  (Ctrl+T to change)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(selector, chunks[3]);
}
