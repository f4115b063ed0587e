//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::pairs::{PairField, PairsError};
use crate::session::DOWNLOAD_FILE_NAME;

/// Bulk text-to-speech CLI.
#[derive(Parser, Debug)]
#[command(name = "bulk-tts-rs")]
#[command(about = "Assemble paired word lists and synthesize them to combined speech")]
#[command(version)]
pub struct Args {
    /// Backend API base URL
    #[arg(long, env = "BULK_TTS_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Upload a word list file (CSV, TXT, JSON)
    #[arg(short, long)]
    pub upload: Option<PathBuf>,

    /// Read pasted word pairs from stdin, one word per line
    #[arg(long)]
    pub paste: bool,

    /// Edit a table cell: "INDEX:FIELD=VALUE" with field text1, language1, text2 or language2
    #[arg(short, long, value_name = "SPEC")]
    pub edit: Vec<String>,

    /// Swap the two sides of a row
    #[arg(long, value_name = "INDEX")]
    pub swap: Vec<usize>,

    /// Remove a row (later rows shift up and are renumbered)
    #[arg(long, value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// Clear all rows and any generated audio
    #[arg(long)]
    pub clear: bool,

    /// Default language for the first column of newly added pairs
    #[arg(long, value_name = "CODE")]
    pub language1: Option<String>,

    /// Default language for the second column of newly added pairs
    #[arg(long, value_name = "CODE")]
    pub language2: Option<String>,

    /// List the supported languages
    #[arg(long)]
    pub list_languages: bool,

    /// Generate speech from the current pair list
    #[arg(short, long)]
    pub generate: bool,

    /// Output audio file
    #[arg(short, long, default_value = DOWNLOAD_FILE_NAME)]
    pub output: PathBuf,

    /// Print the generated audio as a data URI
    #[arg(long)]
    pub data_uri: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// File extensions the upload control advertises. A mismatch is a hint,
/// not a rejection: the backend decides what it can parse.
const UPLOAD_EXTENSIONS: [&str; 3] = ["csv", "txt", "json"];

/// Whether a path matches the advertised upload filter.
pub fn matches_upload_filter(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            UPLOAD_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// A parsed edit instruction targeting one cell of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSpec {
    /// Row index as shown by the table printout.
    pub index: usize,
    /// The cell to replace.
    pub field: PairField,
    /// The new cell value, taken verbatim.
    pub value: String,
}

/// Errors that can occur when parsing an edit instruction.
#[derive(Error, Debug)]
pub enum EditSpecParseError {
    #[error("Invalid format: {0}. Expected 'INDEX:FIELD=VALUE'")]
    InvalidFormat(String),

    #[error("Invalid row index: {0}")]
    InvalidIndex(String),

    #[error(transparent)]
    UnknownField(#[from] PairsError),
}

impl EditSpec {
    /// Parse an edit instruction from "INDEX:FIELD=VALUE" format.
    ///
    /// The value part is kept as written, including any '=' or ':' it
    /// contains and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use bulk_tts_rs::cli::EditSpec;
    /// let edit = EditSpec::parse("0:text1=Hallo");
    /// ```
    pub fn parse(input: &str) -> Result<Self, EditSpecParseError> {
        let (index_part, rest) = input.split_once(':').ok_or_else(|| {
            EditSpecParseError::InvalidFormat("Missing colon separator".to_string())
        })?;
        let (field_part, value) = rest.split_once('=').ok_or_else(|| {
            EditSpecParseError::InvalidFormat("Missing equals separator".to_string())
        })?;

        let index = index_part
            .trim()
            .parse::<usize>()
            .map_err(|_| EditSpecParseError::InvalidIndex(index_part.trim().to_string()))?;
        let field = PairField::from_str(field_part.trim())?;

        Ok(Self {
            index,
            field,
            value: value.to_string(),
        })
    }
}
