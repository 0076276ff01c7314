// Session token storage.
// A single explicit slot holding the GitHub bearer token for the lifetime of the process.

/// Holds the bearer token for the current session.
///
/// The token is never validated or persisted to disk; it lives exactly as
/// long as the process, seeded from `GITHUB_TOKEN` when set.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: Option<String>,
}

impl TokenStore {
    /// Create a store seeded from the `GITHUB_TOKEN` environment variable.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }

    /// Store a token, replacing any previous one.
    pub fn save(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Get the current token, if one has been stored.
    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Forget the token.
    pub fn clear(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_get_clear() {
        let mut store = TokenStore::default();
        assert!(store.get().is_none());

        store.save("ghp_example");
        assert_eq!(store.get(), Some("ghp_example"));

        store.save("ghp_replacement");
        assert_eq!(store.get(), Some("ghp_replacement"));

        store.clear();
        assert!(store.get().is_none());
    }
}
