// GitHub API and note wire types.
// Defines the note record format and the Contents API request/response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipient category of a note.
///
/// The wire strings are fixed by the existing data file; anything
/// unrecognized decodes to the fallback category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NoteKind {
    #[serde(rename = "written-to-A")]
    WrittenToA,
    #[serde(rename = "written-to-B")]
    WrittenToB,
    #[default]
    #[serde(rename = "other", other)]
    Other,
}

impl NoteKind {
    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            NoteKind::WrittenToA => "Written to A",
            NoteKind::WrittenToB => "Written to B",
            NoteKind::Other => "Other",
        }
    }

    /// Cycle to the next category (compose page selector).
    pub fn next(&self) -> Self {
        match self {
            NoteKind::WrittenToA => NoteKind::WrittenToB,
            NoteKind::WrittenToB => NoteKind::Other,
            NoteKind::Other => NoteKind::WrittenToA,
        }
    }
}

/// A single user-authored note. Immutable once rendered; the full
/// collection is the unit of persistence, not individual notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: NoteKind,
    pub timestamp: DateTime<Utc>,
}

/// The notes file as read from the repository: the decoded collection plus
/// the blob `sha` required for a conditional update.
#[derive(Debug, Clone, Default)]
pub struct NotesFile {
    pub notes: Vec<Note>,
    pub sha: Option<String>,
}

/// Contents API read response (the fields quill uses).
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    /// Base64-encoded file body, wrapped with newlines by GitHub.
    pub content: String,
    pub sha: String,
}

/// Contents API write request body.
#[derive(Debug, Clone, Serialize)]
pub struct PutContents {
    pub message: String,
    /// Base64-encoded file body.
    pub content: String,
    pub branch: String,
    /// Blob sha of the file being replaced; omitted when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_kind_wire_strings() {
        assert_eq!(
            serde_json::to_string(&NoteKind::WrittenToA).unwrap(),
            "\"written-to-A\""
        );
        assert_eq!(
            serde_json::to_string(&NoteKind::WrittenToB).unwrap(),
            "\"written-to-B\""
        );
        assert_eq!(serde_json::to_string(&NoteKind::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_other() {
        let kind: NoteKind = serde_json::from_str("\"written-to-someone-else\"").unwrap();
        assert_eq!(kind, NoteKind::Other);
    }

    #[test]
    fn test_note_without_title() {
        let note: Note = serde_json::from_str(
            r#"{"content": "hello", "type": "written-to-A", "timestamp": "2024-03-05T09:07:00Z"}"#,
        )
        .unwrap();
        assert!(note.title.is_none());
        assert_eq!(note.kind, NoteKind::WrittenToA);

        // An absent title stays absent on the wire.
        let json = serde_json::to_string(&note).unwrap();
        assert!(!json.contains("title"));
    }

    #[test]
    fn test_note_round_trip() {
        let note = Note {
            title: Some("a title".to_string()),
            content: "body".to_string(),
            kind: NoteKind::WrittenToB,
            timestamp: "2024-03-05T09:07:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
