// Compose page state.
// Line-editing for the note fields and assembly of the finished note.

use chrono::Utc;

use crate::github::{Note, NoteKind};

/// Which compose field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Content,
    Image,
}

impl ComposeField {
    pub fn next(&self) -> Self {
        match self {
            ComposeField::Title => ComposeField::Content,
            ComposeField::Content => ComposeField::Image,
            ComposeField::Image => ComposeField::Title,
        }
    }
}

/// Editable state of the compose page.
#[derive(Debug, Default)]
pub struct ComposeState {
    pub title: String,
    pub content: String,
    /// Local path of an image to upload alongside the note, if any.
    pub image_path: String,
    pub kind: NoteKind,
    pub focus: ComposeField,
}

impl ComposeState {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::Title => &mut self.title,
            ComposeField::Content => &mut self.content,
            ComposeField::Image => &mut self.image_path,
        }
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Move focus to the next field (Tab).
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Cycle the recipient category.
    pub fn cycle_kind(&mut self) {
        self.kind = self.kind.next();
    }

    /// A note needs at least some content to be saved.
    pub fn is_submittable(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Assemble the note, stamped now. An empty title stays absent rather
    /// than becoming an empty string.
    pub fn build_note(&self) -> Note {
        let title = self.title.trim();
        Note {
            title: (!title.is_empty()).then(|| title.to_string()),
            content: self.content.clone(),
            kind: self.kind,
            timestamp: Utc::now(),
        }
    }

    /// Reset all fields after a successful save.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_follows_focus() {
        let mut compose = ComposeState::new();
        compose.insert_char('h');
        compose.insert_char('i');
        assert_eq!(compose.title, "hi");

        compose.focus_next();
        compose.insert_char('x');
        assert_eq!(compose.content, "x");

        compose.backspace();
        assert_eq!(compose.content, "");
        compose.backspace(); // empty field is fine
    }

    #[test]
    fn test_empty_title_becomes_absent() {
        let mut compose = ComposeState::new();
        compose.content = "some body".to_string();
        compose.title = "   ".to_string();

        let note = compose.build_note();
        assert!(note.title.is_none());
        assert_eq!(note.content, "some body");
    }

    #[test]
    fn test_submittable_requires_content() {
        let mut compose = ComposeState::new();
        assert!(!compose.is_submittable());
        compose.title = "only a title".to_string();
        assert!(!compose.is_submittable());
        compose.content = "now a body".to_string();
        assert!(compose.is_submittable());
    }

    #[test]
    fn test_cycle_kind_covers_all_categories() {
        let mut compose = ComposeState::new();
        let start = compose.kind;
        compose.cycle_kind();
        compose.cycle_kind();
        compose.cycle_kind();
        assert_eq!(compose.kind, start);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut compose = ComposeState::new();
        compose.title = "t".to_string();
        compose.content = "c".to_string();
        compose.image_path = "/tmp/x.png".to_string();
        compose.cycle_kind();

        compose.clear();
        assert_eq!(compose.title, "");
        assert_eq!(compose.content, "");
        assert_eq!(compose.image_path, "");
        assert_eq!(compose.kind, NoteKind::default());
    }
}
