//! Single-slot credential persistence
//!
//! The token lives in one JSON blob, overwrite-only, with no history.
//! Anything that prevents reading a token back (missing file, malformed
//! JSON, missing key) reads as "no credential".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::store::{TOKEN_DIR, TOKEN_FILE};

/// On-disk shape of the credential blob
#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Load/save interface for the single opaque credential
pub trait TokenStore {
    /// Read the stored token, `None` when missing or unreadable
    fn load(&self) -> Option<String>;

    /// Overwrite the stored token
    fn save(&self, token: &str) -> Result<()>;
}

/// Token store backed by a JSON blob on the local filesystem
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform config location, `<config>/hubkit/token.json`
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .context("could not determine a configuration directory")?;
        Ok(Self::new(base.join(TOKEN_DIR).join(TOKEN_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let data = fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_str(&data).ok()?;
        Some(stored.token)
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(&self.path, data)?;
        debug!("token written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("token.json"))
    }

    #[test]
    fn save_then_load_round_trips_the_exact_token() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).save("ghp_sekrit123").unwrap();

        // a fresh instance on the same path simulates a process restart
        assert_eq!(store_in(&dir).load().as_deref(), Some("ghp_sekrit123"));
    }

    #[test]
    fn missing_file_reads_as_no_credential() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn malformed_json_reads_as_no_credential() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("token.json"), "not json at all").unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn missing_key_reads_as_no_credential() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("token.json"), r#"{"user": "octocat"}"#).unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn saving_overwrites_the_previous_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().as_deref(), Some("second"));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token.json"));
        store.save("tok").unwrap();
        assert_eq!(store.load().as_deref(), Some("tok"));
    }
}
