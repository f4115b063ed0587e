//! Backend request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pairs::TextPair;

/// Errors that can occur when communicating with the backend.
///
/// The variants keep the underlying cause for diagnostics; user-facing
/// reporting collapses all of them to one generic message per operation.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// A supported synthesis language from the backend catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Response from the language catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

/// A text pair as the upload and parse endpoints return it: no language
/// codes yet, those are stamped client-side from the default selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPair {
    pub text1: String,
    pub text2: String,
}

/// Response from the file upload and bulk text parse endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedPairsResponse {
    pub pairs: Vec<ParsedPair>,
}

/// Request body for the bulk synthesis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTtsRequest {
    pub pairs: Vec<TextPair>,
}

/// Response from the bulk synthesis endpoint. The backend also reports a
/// container format field; only the base64 audio payload is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTtsResponse {
    pub audio: String,
}
