// Cache module for the local note snapshot.
// Avoids refetching the notes file from GitHub on every page visit.

pub mod paths;
pub mod store;

pub use paths::notes_path;
pub use store::{CachedNotes, NOTES_TTL, invalidate, read_if_valid, write_notes};
