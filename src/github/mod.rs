// GitHub API module.
// Provides the client and Contents API operations the notes pipeline is built on.

pub mod client;
pub mod contents;
pub mod types;

pub use client::GitHubClient;
pub use types::{Note, NoteKind, NotesFile, RateLimit};
