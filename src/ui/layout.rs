// Screen layout.
// Resolves the named regions every page shares. Resolution cannot fail or
// produce missing handles; a page always gets all three regions.

use ratatui::prelude::*;

/// The named regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Header bar with the app name and current page title.
    pub header: Rect,
    /// Main content area the active page draws into.
    pub body: Rect,
    /// Status bar with keybinding hints.
    pub status: Rect,
}

impl ScreenLayout {
    pub fn resolve(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }
}
