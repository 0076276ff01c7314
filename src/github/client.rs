// GitHub API HTTP client.
// Handles authentication headers, rate limit tracking, and raw request execution.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{QuillError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with authentication and rate limit tracking.
///
/// Requests return the raw status and body; interpreting a status into
/// success or a typed error is the caller's concern, since the read and
/// write paths disagree about what 404 means.
pub struct GitHubClient {
    client: Client,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a new GitHub client with the given token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| QuillError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("quill-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(QuillError::Api)?;

        Ok(Self {
            client,
            rate_limit: RateLimit::default(),
        })
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a GET request, returning the status and body.
    pub async fn get(&mut self, endpoint: &str) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self.client.get(&url).send().await.map_err(QuillError::Api)?;

        self.update_rate_limit(&response);
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    /// Make a PUT request with a JSON body, returning the status and body.
    pub async fn put_json<T: serde::Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        body: &T,
    ) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(QuillError::Api)?;

        self.update_rate_limit(&response);
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        if let Some(limit) = response
            .headers()
            .get("x-ratelimit-limit")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit.limit = limit;
        }

        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.rate_limit.remaining = remaining;
        }
    }
}
