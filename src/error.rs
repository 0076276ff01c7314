// Error types for the quill application.
// Covers GitHub API errors, content decoding errors, and cache/filesystem errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token: {detail}")]
    Auth { detail: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Fetching notes failed (HTTP {status}): {body}")]
    Fetch { status: u16, body: String },

    #[error("Upload failed (HTTP {status}): {body}")]
    Upload { status: u16, body: String },

    #[error("Write conflict: the notes file changed on the remote since it was read")]
    Conflict,

    #[error("Malformed notes content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("No GitHub token: set GITHUB_TOKEN or enter one on the home page")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuillError>;
