// Cache path utilities.
// Locates the on-disk snapshot of the note collection.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/quill on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "quill").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached note collection.
pub fn notes_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("notes.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_path_is_under_cache_dir() {
        let dir = cache_dir().unwrap();
        let path = notes_path().unwrap();
        assert!(path.starts_with(&dir));
        assert!(path.ends_with("notes.json"));
    }
}
