/**
 * Token Storage
 *
 * Persists the session token in a single file, `token`, inside the
 * client's config directory (`<config_dir>/authdesk/token`).
 *
 * The token is written on login, removed on logout and removed when a
 * stored token fails re-validation at startup.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "authdesk";
const TOKEN_FILE: &str = "token";

/// File-backed token storage
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory
    ///
    /// `None` when the platform has no config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(TOKEN_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, if any
    ///
    /// A missing, unreadable or empty file counts as no token.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Write the token, creating the directory if needed
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Remove the stored token; removing a missing token is not an error
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("nested").join("token"));

        assert_eq!(store.load(), None);
        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        store.save("  \n").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_default_location_file_name() {
        if let Some(store) = TokenStore::default_location() {
            assert!(store.path().ends_with("authdesk/token"));
        }
    }
}
