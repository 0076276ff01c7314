// Notes list state.
// Holds the loaded collection, the selection, and the newest-first display
// transformation with its mapping back to stored indices.

use ratatui::widgets::ListState;

use crate::github::{Note, NoteKind};

/// How many characters of content a list row previews.
pub const PREVIEW_LEN: usize = 50;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// One visible list row, derived from a note without mutating the stored
/// collection. `original_index` points into the stored (ascending) order,
/// not the reversed display order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRow {
    pub original_index: usize,
    pub title: Option<String>,
    pub kind: NoteKind,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub preview: String,
}

/// Build the display rows: newest first, each remembering where it lives in
/// the stored order.
pub fn display_rows(notes: &[Note]) -> Vec<NoteRow> {
    notes
        .iter()
        .enumerate()
        .rev()
        .map(|(original_index, note)| NoteRow {
            original_index,
            title: note.title.clone(),
            kind: note.kind,
            timestamp: note.timestamp,
            preview: preview(&note.content),
        })
        .collect()
}

/// First `PREVIEW_LEN` characters of the content, with an ellipsis appended
/// only when something was actually cut off.
pub fn preview(content: &str) -> String {
    let mut out: String = content.chars().take(PREVIEW_LEN).collect();
    if content.chars().count() > PREVIEW_LEN {
        out.push_str("...");
    }
    out
}

/// State for the browse page: loaded notes plus list selection.
#[derive(Debug, Default)]
pub struct NotesState {
    /// The stored collection, chronological-ascending.
    pub data: LoadingState<Vec<Note>>,
    /// Selection within the displayed (reversed) rows.
    pub list_state: ListState,
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
    }

    pub fn set_loaded(&mut self, notes: Vec<Note>) {
        let select = if notes.is_empty() { None } else { Some(0) };
        self.data = LoadingState::Loaded(notes);
        self.list_state.select(select);
    }

    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }

    pub fn notes(&self) -> Option<&Vec<Note>> {
        self.data.data()
    }

    fn len(&self) -> usize {
        self.notes().map_or(0, Vec::len)
    }

    /// Select the next displayed row.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous displayed row.
    pub fn select_prev(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Map the selected display row back to its stored index.
    pub fn selected_original_index(&self) -> Option<usize> {
        let displayed = self.list_state.selected()?;
        let len = self.len();
        if displayed < len {
            Some(len - 1 - displayed)
        } else {
            None
        }
    }

    /// The note behind the selected row.
    pub fn selected_note(&self) -> Option<&Note> {
        let index = self.selected_original_index()?;
        self.notes()?.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(content: &str) -> Note {
        Note {
            title: None,
            content: content.to_string(),
            kind: NoteKind::Other,
            timestamp: "2024-03-05T09:07:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_row_count_matches_input() {
        assert!(display_rows(&[]).is_empty());
        let notes = vec![note("a"), note("b"), note("c")];
        assert_eq!(display_rows(&notes).len(), 3);
    }

    #[test]
    fn test_display_order_is_reversed_with_original_indices() {
        let notes = vec![note("A"), note("B"), note("C")];
        let rows = display_rows(&notes);

        // Input [A, B, C] displays [C, B, A].
        assert_eq!(rows[0].preview, "C");
        assert_eq!(rows[1].preview, "B");
        assert_eq!(rows[2].preview, "A");

        // The row showing C maps back to stored index 2.
        assert_eq!(rows[0].original_index, 2);
        assert_eq!(rows[1].original_index, 1);
        assert_eq!(rows[2].original_index, 0);
    }

    #[test]
    fn test_preview_truncation() {
        let short = "x".repeat(40);
        assert_eq!(preview(&short), short);

        let exact = "x".repeat(50);
        assert_eq!(preview(&exact), exact);

        let long = "x".repeat(51);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let long = "月".repeat(51);
        assert_eq!(preview(&long), format!("{}...", "月".repeat(50)));
    }

    #[test]
    fn test_selection_maps_to_original_index() {
        let mut state = NotesState::new();
        state.set_loaded(vec![note("A"), note("B"), note("C")]);

        // Loading selects the first displayed row, which is the newest note.
        assert_eq!(state.list_state.selected(), Some(0));
        assert_eq!(state.selected_original_index(), Some(2));
        assert_eq!(state.selected_note().unwrap().content, "C");

        state.select_next();
        assert_eq!(state.selected_original_index(), Some(1));

        state.select_next();
        state.select_next(); // stays at the last row
        assert_eq!(state.selected_original_index(), Some(0));

        state.select_prev();
        assert_eq!(state.selected_original_index(), Some(1));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut state = NotesState::new();
        state.set_loaded(Vec::new());
        assert_eq!(state.list_state.selected(), None);
        assert_eq!(state.selected_original_index(), None);
        state.select_next();
        assert_eq!(state.list_state.selected(), None);
    }
}
