//! CLI argument parsing and validation.

mod args;

pub use args::{Args, EditSpec, EditSpecParseError, matches_upload_filter};
