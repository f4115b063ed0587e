//! bulk-tts-rs CLI entry point.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result, bail};
use bulk_tts_rs::backend::{Backend, create_backend};
use bulk_tts_rs::cli::{Args, EditSpec, matches_upload_filter};
use bulk_tts_rs::session::Session;
use bulk_tts_rs::store::{SessionStore, StoredSession};
use chrono::Utc;
use clap::Parser;
use tracing::warn;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    // Edit instructions are parsed before anything runs, so a typo
    // aborts the invocation with no state touched.
    let edits = args
        .edit
        .iter()
        .map(|spec| EditSpec::parse(spec).with_context(|| format!("Invalid edit '{spec}'")))
        .collect::<Result<Vec<_>>>()?;

    let store = SessionStore::new();
    let stored = store.load().context("Failed to load saved session")?;

    let backend = create_backend(&args.api_url);
    let mut session = Session::new(backend);
    session.restore(
        stored.pairs,
        stored.default_language1,
        stored.default_language2,
    );

    // The catalog is fetched once per run, before any other action.
    session.fetch_languages();

    if let Some(code) = &args.language1 {
        session.set_default_language1(code.clone());
    }
    if let Some(code) = &args.language2 {
        session.set_default_language2(code.clone());
    }

    // Utility command: print the catalog and exit.
    if args.list_languages {
        print_catalog(&session);
        save_session(&store, &session)?;
        return finish(&session);
    }

    if args.clear {
        session.clear_all();
        println!("Cleared all pairs.");
    }

    if let Some(path) = &args.upload {
        if !matches_upload_filter(path) {
            warn!(
                "{} does not look like a CSV, TXT or JSON file; sending it anyway",
                path.display()
            );
        }
        session.upload_file(path);
    }

    if args.paste {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read pasted text from stdin")?;

        // An empty paste buffer is a cancel, not a request.
        if text.trim().is_empty() {
            println!("No pasted text provided, skipping.");
        } else {
            session.paste_text(&text);
        }
    }

    if let Err(err) = apply_row_actions(&mut session, &edits, &args.swap, &args.remove) {
        save_session(&store, &session)?;
        return Err(err);
    }

    if !session.pairs().is_empty() {
        print_table(&session);
    }

    let generated = if args.generate {
        generate_speech(&mut session, &args)
    } else {
        Ok(())
    };

    save_session(&store, &session)?;
    generated?;

    finish(&session)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "bulk_tts_rs=debug"
    } else {
        "bulk_tts_rs=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn apply_row_actions<B: Backend>(
    session: &mut Session<B>,
    edits: &[EditSpec],
    swaps: &[usize],
    removes: &[usize],
) -> Result<()> {
    for edit in edits {
        session
            .edit_pair(edit.index, edit.field, &edit.value)
            .with_context(|| format!("Cannot edit row {}", edit.index))?;
    }

    for &index in swaps {
        session
            .swap_pair(index)
            .with_context(|| format!("Cannot swap row {index}"))?;
    }

    for &index in removes {
        session
            .remove_pair(index)
            .with_context(|| format!("Cannot remove row {index}"))?;
    }

    Ok(())
}

fn print_catalog<B: Backend>(session: &Session<B>) {
    let languages = session.languages();

    if languages.is_empty() {
        println!("No languages available.");
        return;
    }

    println!("Supported languages:");
    for language in languages {
        let mut markers = Vec::new();
        if language.code == session.default_language1() {
            markers.push("default 1");
        }
        if language.code == session.default_language2() {
            markers.push("default 2");
        }

        if markers.is_empty() {
            println!("  {}  {}", language.code, language.name);
        } else {
            println!("  {}  {} ({})", language.code, language.name, markers.join(", "));
        }
    }
}

fn print_table<B: Backend>(session: &Session<B>) {
    println!();
    println!(
        "{:<4} {:<24} {:<10} {:<24} {:<10}",
        "#", "First Text", "Language", "Second Text", "Language"
    );
    for (index, pair) in session.pairs().iter().enumerate() {
        println!(
            "{:<4} {:<24} {:<10} {:<24} {:<10}",
            index, pair.text1, pair.language1, pair.text2, pair.language2
        );
    }
    println!();
}

fn generate_speech<B: Backend>(session: &mut Session<B>, args: &Args) -> Result<()> {
    if session.pairs().is_empty() {
        println!("Nothing to generate: the pair list is empty.");
        return Ok(());
    }

    println!("Generating speech for {} pair(s)...", session.pairs().len());
    session.generate_speech();

    // A failed synthesis is already recorded as the session error.
    let Some(audio) = session.audio() else {
        return Ok(());
    };

    let data = audio
        .bytes()
        .context("Backend returned an invalid audio payload")?;

    let mut file = fs::File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;

    file.write_all(&data)
        .with_context(|| format!("Failed to write audio to: {}", args.output.display()))?;

    println!("Audio saved to: {}", args.output.display());
    println!("  Size: {} bytes", data.len());

    if args.data_uri {
        println!("{}", audio.data_uri());
    }

    Ok(())
}

fn save_session<B: Backend>(store: &SessionStore, session: &Session<B>) -> Result<()> {
    let stored = StoredSession {
        pairs: session.pairs().clone(),
        default_language1: session.default_language1().to_string(),
        default_language2: session.default_language2().to_string(),
        saved_at: Utc::now().to_rfc3339(),
    };

    store.save(&stored).context("Failed to save session")
}

fn finish<B: Backend>(session: &Session<B>) -> Result<()> {
    if let Some(message) = session.error() {
        bail!("{message}");
    }

    Ok(())
}
