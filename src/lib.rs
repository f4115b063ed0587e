//! bulk-tts-rs: bulk text-to-speech CLI.
//!
//! This crate provides a command-line front-end for a bulk TTS backend:
//! it assembles pairs of text snippets, each tagged with a language,
//! submits them for synthesis, and saves the combined audio.

pub mod backend;
pub mod cli;
pub mod pairs;
pub mod session;
pub mod store;
