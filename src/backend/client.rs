//! HTTP client for backend communication.

use std::path::Path;

use crate::pairs::TextPair;

use super::Backend;
use super::types::{
    BackendError, BulkTtsRequest, BulkTtsResponse, LanguagesResponse, ParsedPairsResponse,
};

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client for the given API base URL.
    pub fn new(api_url: &str) -> Self {
        let base_url = api_url.trim_end_matches('/').to_string();

        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn content_type_for(path: &Path) -> &'static str {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => "text/csv",
            Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
            Some(ext) if ext.eq_ignore_ascii_case("json") => "application/json",
            _ => "application/octet-stream",
        }
    }
}

impl Backend for HttpBackend {
    fn languages(&self) -> Result<LanguagesResponse, BackendError> {
        let url = format!("{}/api/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn upload_file(&self, path: &Path) -> Result<ParsedPairsResponse, BackendError> {
        let url = format!("{}/api/upload-file", self.base_url);

        let file_data = std::fs::read(path)
            .map_err(|_| BackendError::FileNotFound(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.txt");

        let file_part = reqwest::blocking::multipart::Part::bytes(file_data)
            .file_name(file_name.to_string())
            .mime_str(Self::content_type_for(path))
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let form = reqwest::blocking::multipart::Form::new().part("file", file_part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn parse_bulk_text(&self, text: &str) -> Result<ParsedPairsResponse, BackendError> {
        let url = format!("{}/api/parse-bulk-text", self.base_url);

        let body = serde_json::json!({ "text": text });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn bulk_tts(&self, pairs: &[TextPair]) -> Result<BulkTtsResponse, BackendError> {
        let url = format!("{}/api/bulk-tts", self.base_url);

        let request = BulkTtsRequest {
            pairs: pairs.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
