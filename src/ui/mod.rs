// UI module for rendering the TUI.
// Dispatches to the active page and draws the shared header, status bar,
// and toast overlay.

mod compose;
mod detail;
mod home;
pub mod layout;
pub mod list;
mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::Page;

use layout::ScreenLayout;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let layout = ScreenLayout::resolve(frame.area());

    draw_header(frame, app, layout.header);
    draw_body(frame, app, layout.body);
    draw_status_bar(frame, app, layout.status);

    // Toast overlay (rendered last, on top of everything)
    if let Some(toast) = &app.toast {
        toast::draw_toast(frame, toast);
    }
}

/// Draw the header bar with the app name and current page title.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " quill ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.page.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the main content area based on the active page.
fn draw_body(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.page {
        Page::Home => home::render_home(frame, app.token.get().is_some(), &app.token_input, area),
        Page::Compose => compose::render_compose(frame, &app.compose, area),
        Page::Browse => list::render_notes_list(frame, &mut app.notes, area),
        Page::Detail => match app.notes.selected_note() {
            Some(note) => detail::render_detail(frame, note, area),
            None => list::render_empty(frame, area, "Nothing selected"),
        },
    }
}

/// Draw the status bar with keybinding hints and rate limit.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = match app.page {
        Page::Home => vec![
            Span::raw(" n "),
            Span::styled("New", Style::default().fg(Color::DarkGray)),
            Span::raw("  b "),
            Span::styled("Browse", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Page::Compose => vec![
            Span::raw(" Tab "),
            Span::styled("Next field", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^T "),
            Span::styled("Category", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^S "),
            Span::styled("Save", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
        ],
        Page::Browse => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Open", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
        ],
        Page::Detail => vec![
            Span::raw(" d "),
            Span::styled("Delete", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
        ],
    };

    // Rate limit info on the right when a client exists
    if let Some(client) = &app.client {
        let rate = client.rate_limit();
        if rate.limit > 0 {
            let rate_color = if rate.remaining < 100 {
                Color::Red
            } else {
                Color::DarkGray
            };
            hints.push(Span::styled(
                format!("  API: {}/{}", rate.remaining, rate.limit),
                Style::default().fg(rate_color),
            ));
        }
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
