// Repository configuration.
// One source of truth for where notes and images live on GitHub.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the notes file and uploaded images live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository owner (user or organization login).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch committed to.
    pub branch: String,
    /// Path of the JSON file holding the full note collection.
    pub data_file: String,
    /// Directory uploaded images are committed under.
    pub image_dir: String,
    /// Base URL the deployed site serves files from (for image links).
    pub base_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            branch: "main".to_string(),
            data_file: "data.json".to_string(),
            image_dir: "static/images/user-uploads/".to_string(),
            base_url: String::new(),
        }
    }
}

impl GitHubConfig {
    /// Load the config file, falling back to defaults when it doesn't exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(&path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Write the config file, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, serde_json::to_string_pretty(self)?)?;
        }
        Ok(())
    }

    /// Whether enough is configured to talk to the API.
    pub fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty()
    }

    /// Repository path an uploaded image is committed to. Tolerates a
    /// user-edited `image_dir` with or without surrounding slashes.
    pub fn image_path(&self, filename: &str) -> String {
        format!("{}/{}", self.image_dir.trim_matches('/'), filename)
    }

    /// Public URL an uploaded image is served from after deployment.
    /// Built from the same normalized path as the commit, not read back.
    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.image_path(filename)
        )
    }
}

/// Path to the application config file (~/.config/quill on Linux).
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "quill").map(|dirs| dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GitHubConfig::default();
        assert_eq!(config.branch, "main");
        assert_eq!(config.data_file, "data.json");
        assert!(!config.is_complete());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GitHubConfig =
            serde_json::from_str(r#"{"owner": "someone", "repo": "notes"}"#).unwrap();
        assert_eq!(config.owner, "someone");
        assert_eq!(config.branch, "main");
        assert!(config.is_complete());
    }

    #[test]
    fn test_image_url_normalizes_slashes() {
        let config = GitHubConfig {
            base_url: "https://someone.github.io/".to_string(),
            image_dir: "static/images/user-uploads/".to_string(),
            ..GitHubConfig::default()
        };
        assert_eq!(
            config.image_url("1714000000000-cat.png"),
            "https://someone.github.io/static/images/user-uploads/1714000000000-cat.png"
        );
    }

    #[test]
    fn test_image_path_and_url_agree_without_trailing_slash() {
        let config = GitHubConfig {
            base_url: "https://someone.github.io".to_string(),
            image_dir: "static/images".to_string(),
            ..GitHubConfig::default()
        };
        assert_eq!(config.image_path("cat.png"), "static/images/cat.png");
        // The served URL is the base URL plus the exact committed path.
        assert_eq!(
            config.image_url("cat.png"),
            format!("{}/{}", config.base_url, config.image_path("cat.png"))
        );
    }
}
