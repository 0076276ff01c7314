// Toast banner rendering.
// A bottom-centered overlay that the app drops once the toast expires.

use ratatui::{prelude::*, widgets::*};

use crate::state::{Toast, ToastLevel};

/// Draw the toast banner over the current page.
pub fn draw_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let width = (toast.message.chars().count() as u16 + 4)
        .min(area.width.saturating_sub(2))
        .max(10);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = area.height.saturating_sub(3);
    let banner_area = Rect::new(x, y, width, 1);

    let bg = match toast.level {
        ToastLevel::Error => Color::Red,
        ToastLevel::Success => Color::Green,
    };

    frame.render_widget(Clear, banner_area);
    let banner = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(bg));
    frame.render_widget(banner, banner_area);
}
