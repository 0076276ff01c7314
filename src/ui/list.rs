// Note list rendering for the browse page.
// Newest-first rows with category styling, formatted timestamps, and
// truncated previews; an empty collection shows the empty state instead.

use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::github::NoteKind;
use crate::state::{LoadingState, NotesState, display_rows};

/// Format a timestamp as "M月D日 HH:MM" in the viewer's local timezone.
/// Month and day are unpadded, hour and minute zero-padded; no year.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let local = dt.with_timezone(&Local);
    format!(
        "{}月{}日 {:02}:{:02}",
        local.month(),
        local.day(),
        local.hour(),
        local.minute()
    )
}

/// Accent color for a note category.
pub fn kind_color(kind: NoteKind) -> Color {
    match kind {
        NoteKind::WrittenToA => Color::Cyan,
        NoteKind::WrittenToB => Color::Magenta,
        NoteKind::Other => Color::DarkGray,
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render the persistent empty state.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the notes list.
pub fn render_notes_list(frame: &mut Frame, state: &mut NotesState, area: Rect) {
    match &state.data {
        LoadingState::Idle => render_empty(frame, area, "Press r to load notes"),
        LoadingState::Loading => render_loading(frame, area, "Loading notes"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(notes) => {
            if notes.is_empty() {
                render_empty(frame, area, "No notes yet — press n to write one");
                return;
            }

            let items: Vec<ListItem> = display_rows(notes)
                .into_iter()
                .map(|row| {
                    let color = kind_color(row.kind);
                    let title_line = match &row.title {
                        Some(title) => Line::from(Span::styled(
                            title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        None => Line::from(Span::styled(
                            "(no title)",
                            Style::default().fg(Color::DarkGray),
                        )),
                    };
                    let meta_line = Line::from(vec![
                        Span::styled(row.kind.label(), Style::default().fg(color)),
                        Span::styled(
                            format!(" · {}", format_timestamp(&row.timestamp)),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]);
                    let preview_line = Line::from(Span::styled(
                        row.preview,
                        Style::default().fg(Color::Gray),
                    ));

                    ListItem::new(vec![title_line, meta_line, preview_line])
                })
                .collect();

            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Notes "))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut state.list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_matches_local_decomposition() {
        let instant: DateTime<Utc> = "2024-03-05T09:07:00Z".parse().unwrap();
        let local = instant.with_timezone(&Local);

        let expected = format!(
            "{}月{}日 {:02}:{:02}",
            local.month(),
            local.day(),
            local.hour(),
            local.minute()
        );
        assert_eq!(format_timestamp(&instant), expected);

        // Hour and minute are always zero-padded to two digits.
        let rendered = format_timestamp(&instant);
        let clock = rendered.split(' ').nth(1).unwrap();
        assert_eq!(clock.len(), 5);
        assert_eq!(clock.as_bytes()[2], b':');
    }

    #[test]
    fn test_format_timestamp_in_utc_is_month_day_clock() {
        // Format-only property: in a UTC-equivalent timezone this instant
        // renders exactly as "3月5日 09:07".
        let instant: DateTime<Utc> = "2024-03-05T09:07:00Z".parse().unwrap();
        let local = instant.with_timezone(&Local);
        if local.offset().local_minus_utc() == 0 {
            assert_eq!(format_timestamp(&instant), "3月5日 09:07");
        }
    }

    #[test]
    fn test_kind_colors_are_distinct() {
        assert_ne!(kind_color(NoteKind::WrittenToA), kind_color(NoteKind::WrittenToB));
        assert_ne!(kind_color(NoteKind::WrittenToA), kind_color(NoteKind::Other));
    }
}
