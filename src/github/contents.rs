// Contents API operations for the notes file and image uploads.
// Fetches and decodes the notes JSON, writes it back conditionally, and
// commits image attachments as new repository files.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::StatusCode;

use crate::config::GitHubConfig;
use crate::error::{QuillError, Result};

use super::client::GitHubClient;
use super::types::{ContentsResponse, Note, NotesFile, PutContents};

impl GitHubClient {
    /// Fetch the notes file. A missing file is an empty collection, not an
    /// error; the returned `sha` is kept for the next conditional write.
    pub async fn fetch_notes(&mut self, config: &GitHubConfig) -> Result<NotesFile> {
        let endpoint = format!(
            "/repos/{}/{}/contents/{}",
            config.owner, config.repo, config.data_file
        );
        let (status, body) = self.get(&endpoint).await?;
        interpret_fetch(status, &body)
    }

    /// Write the full note collection back to the repository.
    ///
    /// Passing the `sha` from the preceding fetch makes the write
    /// conditional: if the file changed remotely in between, GitHub rejects
    /// the update and the caller sees `Conflict` instead of silently
    /// clobbering the concurrent edit.
    pub async fn save_notes(
        &mut self,
        config: &GitHubConfig,
        notes: &[Note],
        sha: Option<&str>,
    ) -> Result<()> {
        let endpoint = format!(
            "/repos/{}/{}/contents/{}",
            config.owner, config.repo, config.data_file
        );
        let request = PutContents {
            message: format!("Update notes ({} entries)", notes.len()),
            content: STANDARD.encode(serde_json::to_vec(notes)?),
            branch: config.branch.clone(),
            sha: sha.map(str::to_string),
        };
        let (status, body) = self.put_json(&endpoint, &request).await?;
        interpret_write(status, &body, &config.data_file)
    }

    /// Commit an image under the configured image directory and return the
    /// URL it will be served from once deployed.
    pub async fn upload_image(
        &mut self,
        config: &GitHubConfig,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String> {
        let filename = unique_image_name(Utc::now().timestamp_millis(), original_name);
        let path = config.image_path(&filename);
        let endpoint = format!("/repos/{}/{}/contents/{}", config.owner, config.repo, path);

        let request = PutContents {
            message: format!("Upload image: {}", filename),
            content: STANDARD.encode(bytes),
            branch: config.branch.clone(),
            sha: None,
        };
        let (status, body) = self.put_json(&endpoint, &request).await?;
        interpret_write(status, &body, &path)?;

        Ok(config.image_url(&filename))
    }
}

/// Interpret a Contents API read response for the notes file.
///
/// 404 means the repository has no notes yet and yields an empty file
/// reference; every other non-2xx status is an error.
pub fn interpret_fetch(status: StatusCode, body: &str) -> Result<NotesFile> {
    if status == StatusCode::NOT_FOUND {
        return Ok(NotesFile::default());
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(QuillError::Auth {
            detail: body.to_string(),
        });
    }
    if !status.is_success() {
        return Err(QuillError::Fetch {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let response: ContentsResponse = serde_json::from_str(body)?;
    Ok(NotesFile {
        notes: decode_notes(&response.content)?,
        sha: Some(response.sha),
    })
}

/// Interpret a Contents API write response. Unlike the read path, 404 here
/// is an error: the target path (or branch) does not exist.
pub fn interpret_write(status: StatusCode, body: &str, path: &str) -> Result<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(QuillError::Auth {
            detail: body.to_string(),
        }),
        StatusCode::NOT_FOUND => Err(QuillError::NotFound(path.to_string())),
        StatusCode::CONFLICT => Err(QuillError::Conflict),
        s => Err(QuillError::Upload {
            status: s.as_u16(),
            body: body.to_string(),
        }),
    }
}

/// Decode the base64 `content` field into the note collection.
/// GitHub wraps the base64 payload with newlines, which must be stripped.
pub fn decode_notes(content: &str) -> Result<Vec<Note>> {
    let stripped: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(stripped)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build a collision-free image filename from a millisecond timestamp and
/// the original name with whitespace replaced.
pub fn unique_image_name(now_millis: i64, original: &str) -> String {
    let sanitized: String = original
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}", now_millis, sanitized)
}
