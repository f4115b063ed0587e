//! Session file storage between runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pairs::PairList;

/// Errors that can occur when reading or writing the session file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// The slice of session state carried between runs: the pair list and
/// the two default language selections. Everything else (catalog, audio,
/// loading, error) lives only for the duration of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub pairs: PairList,
    pub default_language1: String,
    pub default_language2: String,
    #[serde(default)]
    pub saved_at: String,
}

/// Manages the local session file.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a new SessionStore with the default directory.
    pub fn new() -> Self {
        let dir = dirs::home_dir()
            .expect("Could not find home directory")
            .join(".bulk-tts-rs");

        Self { dir }
    }

    /// Create a new SessionStore with a custom directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the store directory path.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone()
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join("session.json")
    }

    /// Load the saved session; a missing file is the empty first-run state.
    pub fn load(&self) -> Result<StoredSession, StoreError> {
        let path = self.session_path();

        if !path.exists() {
            return Ok(StoredSession::default());
        }

        let json = std::fs::read_to_string(path)?;
        let session = serde_json::from_str(&json)?;

        Ok(session)
    }

    /// Save the session, creating the store directory if needed.
    pub fn save(&self, session: &StoredSession) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(self.session_path(), json)?;

        Ok(())
    }

    /// Delete the session file if it exists.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.session_path();

        if path.exists() {
            std::fs::remove_file(path)?;
        }

        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
