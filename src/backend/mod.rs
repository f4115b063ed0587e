//! Backend communication with the bulk TTS server.
//!
//! Provides the trait and HTTP implementation for the four server
//! endpoints: language catalog, file upload, bulk text parse, and
//! bulk speech synthesis.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{
    BackendError, BulkTtsRequest, BulkTtsResponse, Language, LanguagesResponse, ParsedPair,
    ParsedPairsResponse,
};

use crate::pairs::TextPair;

/// Trait for bulk TTS backend communication.
///
/// This trait abstracts the HTTP communication with the server,
/// allowing for mock implementations in tests. A failed request is an
/// error as a whole; response bodies of failures are never inspected.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Fetch the language catalog.
    fn languages(&self) -> Result<LanguagesResponse, BackendError>;

    /// Upload a word list file for server-side parsing.
    ///
    /// The file is sent verbatim as multipart form data; content
    /// validation and parsing are entirely the server's concern.
    fn upload_file(&self, path: &std::path::Path) -> Result<ParsedPairsResponse, BackendError>;

    /// Send raw pasted text for server-side parsing.
    fn parse_bulk_text(&self, text: &str) -> Result<ParsedPairsResponse, BackendError>;

    /// Synthesize combined speech for the full pair list.
    ///
    /// # Returns
    /// Base64-encoded MP3 audio
    fn bulk_tts(&self, pairs: &[TextPair]) -> Result<BulkTtsResponse, BackendError>;
}

/// Create a backend client for the given API base URL.
pub fn create_backend(api_url: &str) -> HttpBackend {
    HttpBackend::new(api_url)
}
