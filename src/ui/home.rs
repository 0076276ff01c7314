// Home page rendering.
// Entry point menu; prompts for a GitHub token when none is stored.

use ratatui::{prelude::*, widgets::*};

/// Render the home page. When no token is stored, the page doubles as the
/// token prompt and `token_input` holds what has been typed so far.
pub fn render_home(frame: &mut Frame, has_token: bool, token_input: &str, area: Rect) {
    if !has_token {
        let masked: String = "•".repeat(token_input.chars().count());
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Paste a GitHub token to load your notes",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Token: ", Style::default().fg(Color::DarkGray)),
                Span::raw(masked),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to save · tokens live only for this session",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let prompt = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Welcome "));
        frame.render_widget(prompt, area);
        return;
    }

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::raw("  Write a new note"),
        ]),
        Line::from(vec![
            Span::styled("b", Style::default().fg(Color::Cyan)),
            Span::raw("  Browse notes"),
        ]),
        Line::from(vec![
            Span::styled("c", Style::default().fg(Color::Cyan)),
            Span::raw("  Clear stored token"),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw("  Quit"),
        ]),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" quill "));
    frame.render_widget(menu, area);
}
