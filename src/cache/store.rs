// Cache store for the note collection snapshot.
// Handles JSON serialization, TTL checking, and atomic filesystem writes.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::Note;

/// How long a snapshot stays valid: 10 minutes.
pub const NOTES_TTL: Duration = Duration::from_secs(10 * 60);

/// The cached note collection with its expiry stamp.
///
/// The snapshot is all-or-nothing: every successful remote fetch replaces
/// it entirely, never merges into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedNotes {
    pub notes: Vec<Note>,
    pub cached_at: DateTime<Utc>,
}

impl CachedNotes {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            cached_at: Utc::now(),
        }
    }

    /// Whether the snapshot is still valid at `now`. The inequality is
    /// strict: a snapshot exactly `ttl` old has already expired.
    pub fn is_valid_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match now.signed_duration_since(self.cached_at).to_std() {
            Ok(elapsed) => elapsed < ttl,
            // cached_at in the future means a clock jump; treat as stale
            Err(_) => false,
        }
    }

    pub fn is_valid(&self, ttl: Duration) -> bool {
        self.is_valid_at(Utc::now(), ttl)
    }
}

/// Read the cached snapshot regardless of age.
pub fn read_cached(path: &Path) -> Result<Option<CachedNotes>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let cached: CachedNotes = serde_json::from_str(&contents)?;
    Ok(Some(cached))
}

/// Read the cached notes if the snapshot is still within its TTL.
/// A missing, unreadable, or corrupt snapshot is a miss, never an error.
pub fn read_if_valid(path: &Path, ttl: Duration) -> Option<Vec<Note>> {
    match read_cached(path) {
        Ok(Some(cached)) if cached.is_valid(ttl) => Some(cached.notes),
        _ => None,
    }
}

/// Replace the snapshot with the given notes, stamped now.
pub fn write_notes(path: &Path, notes: &[Note]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let cached = CachedNotes::new(notes.to_vec());
    let json = serde_json::to_string_pretty(&cached)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete the snapshot (forced refresh).
pub fn invalidate(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::NoteKind;
    use tempfile::TempDir;

    fn sample_notes() -> Vec<Note> {
        vec![Note {
            title: Some("hello".to_string()),
            content: "body".to_string(),
            kind: NoteKind::WrittenToA,
            timestamp: "2024-03-05T09:07:00Z".parse().unwrap(),
        }]
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        let notes = sample_notes();
        write_notes(&path, &notes).unwrap();

        let read = read_if_valid(&path, NOTES_TTL);
        assert_eq!(read, Some(notes));
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let cached = CachedNotes {
            notes: Vec::new(),
            cached_at: "2024-03-05T09:00:00Z".parse().unwrap(),
        };
        let ttl = NOTES_TTL;

        // One millisecond inside the window: still valid.
        let just_inside = "2024-03-05T09:09:59.999Z".parse().unwrap();
        assert!(cached.is_valid_at(just_inside, ttl));

        // Exactly at the boundary: already expired.
        let boundary = "2024-03-05T09:10:00Z".parse().unwrap();
        assert!(!cached.is_valid_at(boundary, ttl));

        let past = "2024-03-05T10:00:00Z".parse().unwrap();
        assert!(!cached.is_valid_at(past, ttl));
    }

    #[test]
    fn test_future_stamp_is_stale() {
        let cached = CachedNotes {
            notes: Vec::new(),
            cached_at: "2024-03-05T09:10:00Z".parse().unwrap(),
        };
        let earlier = "2024-03-05T09:00:00Z".parse().unwrap();
        assert!(!cached.is_valid_at(earlier, NOTES_TTL));
    }

    #[test]
    fn test_expired_snapshot_misses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        write_notes(&path, &sample_notes()).unwrap();

        // Readable when fresh, a miss once the TTL has elapsed.
        assert!(read_if_valid(&path, NOTES_TTL).is_some());
        assert!(read_if_valid(&path, Duration::ZERO).is_none());
    }

    #[test]
    fn test_missing_or_corrupt_file_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        assert!(read_if_valid(&path, NOTES_TTL).is_none());

        fs::write(&path, "{not json").unwrap();
        assert!(read_if_valid(&path, NOTES_TTL).is_none());
    }

    #[test]
    fn test_write_replaces_whole_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        write_notes(&path, &sample_notes()).unwrap();
        write_notes(&path, &[]).unwrap();

        assert_eq!(read_if_valid(&path, NOTES_TTL), Some(Vec::new()));
    }

    #[test]
    fn test_invalidate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        write_notes(&path, &sample_notes()).unwrap();
        invalidate(&path).unwrap();
        assert!(read_if_valid(&path, NOTES_TTL).is_none());

        // Deleting an absent snapshot is fine.
        invalidate(&path).unwrap();
    }
}
