//! Session state and backend orchestration.

use std::path::Path;

use tracing::debug;

use crate::backend::{Backend, Language, ParsedPair};
use crate::pairs::{PairField, PairList, PairsError, TextPair};

use super::audio::AudioClip;

const LOAD_LANGUAGES_ERROR: &str = "Failed to load languages";
const UPLOAD_ERROR: &str = "Failed to process file";
const PARSE_TEXT_ERROR: &str = "Failed to process text";
const GENERATE_ERROR: &str = "Failed to generate speech. Please try again.";

/// The session holding all user-visible state for one run.
///
/// Owns the language catalog, the pair list, the synthesis result, and
/// the loading/error flags; every mutation goes through its methods.
/// Backend failures never surface as `Result`s here: each of the four
/// operations records its fixed user-facing message in `error`, and the
/// newest message overwrites the last.
pub struct Session<B: Backend> {
    backend: B,
    languages: Vec<Language>,
    pairs: PairList,
    default_language1: String,
    default_language2: String,
    audio: Option<AudioClip>,
    is_loading: bool,
    error: Option<String>,
}

impl<B: Backend> Session<B> {
    /// Create a fresh session with empty state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            languages: Vec::new(),
            pairs: PairList::new(),
            default_language1: String::new(),
            default_language2: String::new(),
            audio: None,
            is_loading: false,
            error: None,
        }
    }

    /// Restore pairs and default selections saved by a previous run.
    pub fn restore(
        &mut self,
        pairs: PairList,
        default_language1: String,
        default_language2: String,
    ) {
        self.pairs = pairs;
        self.default_language1 = default_language1;
        self.default_language2 = default_language2;
    }

    /// Fetch the language catalog; called once at startup.
    ///
    /// On the first ever run both default selections are empty and get
    /// initialized to the first returned code. Restored or explicitly
    /// chosen selections are never overwritten. There is no retry.
    pub fn fetch_languages(&mut self) {
        match self.backend.languages() {
            Ok(response) => {
                self.languages = response.languages;
                if let Some(first) = self.languages.first() {
                    if self.default_language1.is_empty() {
                        self.default_language1 = first.code.clone();
                    }
                    if self.default_language2.is_empty() {
                        self.default_language2 = first.code.clone();
                    }
                }
            }
            Err(err) => {
                debug!("language catalog fetch failed: {err}");
                self.error = Some(LOAD_LANGUAGES_ERROR.to_string());
            }
        }
    }

    /// Upload a word list file and append the parsed pairs.
    ///
    /// New pairs are stamped with the current default selections and
    /// appended after the existing rows. On failure the existing rows
    /// are left untouched.
    pub fn upload_file(&mut self, path: &Path) {
        match self.backend.upload_file(path) {
            Ok(response) => self.append_stamped(response.pairs),
            Err(err) => {
                debug!("file upload failed: {err}");
                self.error = Some(UPLOAD_ERROR.to_string());
            }
        }
    }

    /// Send pasted text for parsing and append the parsed pairs.
    ///
    /// Same stamping and append semantics as [`Session::upload_file`].
    pub fn paste_text(&mut self, text: &str) {
        match self.backend.parse_bulk_text(text) {
            Ok(response) => self.append_stamped(response.pairs),
            Err(err) => {
                debug!("bulk text parse failed: {err}");
                self.error = Some(PARSE_TEXT_ERROR.to_string());
            }
        }
    }

    fn append_stamped(&mut self, parsed: Vec<ParsedPair>) {
        let stamped: Vec<TextPair> = parsed
            .into_iter()
            .map(|pair| TextPair {
                text1: pair.text1,
                text2: pair.text2,
                language1: self.default_language1.clone(),
                language2: self.default_language2.clone(),
            })
            .collect();

        self.pairs = self.pairs.appended(stamped);
    }

    /// Empty the pair list and discard any generated audio.
    ///
    /// The catalog and the default selections stay as they are.
    pub fn clear_all(&mut self) {
        self.pairs = PairList::new();
        self.audio = None;
    }

    /// Synthesize speech for the entire current pair list.
    pub fn generate_speech(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.audio = None;

        let result = self.backend.bulk_tts(self.pairs.as_slice());

        // Loading ends with the request, whatever the outcome.
        self.is_loading = false;

        match result {
            Ok(response) => self.audio = Some(AudioClip::from_base64(response.audio)),
            Err(err) => {
                debug!("speech synthesis failed: {err}");
                self.error = Some(GENERATE_ERROR.to_string());
            }
        }
    }

    /// Replace one cell of one row, always against the latest list.
    pub fn edit_pair(
        &mut self,
        index: usize,
        field: PairField,
        value: &str,
    ) -> Result<(), PairsError> {
        self.pairs = self.pairs.edited(index, field, value)?;
        Ok(())
    }

    /// Exchange the two sides of one row.
    pub fn swap_pair(&mut self, index: usize) -> Result<(), PairsError> {
        self.pairs = self.pairs.swapped(index)?;
        Ok(())
    }

    /// Delete one row; later rows shift up.
    pub fn remove_pair(&mut self, index: usize) -> Result<(), PairsError> {
        self.pairs = self.pairs.removed(index)?;
        Ok(())
    }

    pub fn set_default_language1(&mut self, code: impl Into<String>) {
        self.default_language1 = code.into();
    }

    pub fn set_default_language2(&mut self, code: impl Into<String>) {
        self.default_language2 = code.into();
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn pairs(&self) -> &PairList {
        &self.pairs
    }

    pub fn default_language1(&self) -> &str {
        &self.default_language1
    }

    pub fn default_language2(&self) -> &str {
        &self.default_language2
    }

    pub fn audio(&self) -> Option<&AudioClip> {
        self.audio.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
