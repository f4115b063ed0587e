//! Synthesized audio payload handling.

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

/// Default file name for the downloadable audio.
pub const DOWNLOAD_FILE_NAME: &str = "bulk-speech.mp3";

/// Errors that can occur when decoding an audio payload.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Invalid base64 audio payload: {0}")]
    InvalidPayload(String),
}

/// Combined MP3 audio from a synthesis call, held base64-encoded the way
/// the backend delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    payload: String,
}

impl AudioClip {
    /// Wrap a base64 payload as returned by the synthesis endpoint.
    pub fn from_base64(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The playable/downloadable data URI for this clip.
    pub fn data_uri(&self) -> String {
        format!("data:audio/mp3;base64,{}", self.payload)
    }

    /// Decode the payload into raw MP3 bytes for writing to disk.
    pub fn bytes(&self) -> Result<Vec<u8>, AudioError> {
        general_purpose::STANDARD
            .decode(&self.payload)
            .map_err(|e| AudioError::InvalidPayload(e.to_string()))
    }
}
