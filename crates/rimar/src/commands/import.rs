//! Import command: learn style from lyrics, optionally feeding the corpus.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::import::{ImportMode, ImportOutcome, import_text};
use rimar_core::themes::KeywordThemes;
use tracing::{debug, instrument};

use super::{StoreHandle, read_input_file};

/// Arguments for the `import` subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Lyrics file.
    pub file: Utf8PathBuf,

    /// Your own lyrics (style only) or reference lyrics (corpus and style).
    #[arg(short, long, value_enum, default_value_t)]
    pub mode: ImportMode,

    /// Provenance tag for reference imports.
    #[arg(short, long)]
    pub source: Option<String>,

    /// Owner of the learned style (overrides `user_id`).
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Import a lyrics file.
#[instrument(name = "cmd_import", skip_all, fields(file = %args.file, mode = ?args.mode))]
pub fn cmd_import(
    args: ImportArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input_bytes)?;
    let user = args.user.as_deref().unwrap_or(&config.user_id);
    debug!(user, "executing import command");

    let handle = StoreHandle::open(config)?;
    let outcome = import_text(
        &handle.store,
        &KeywordThemes,
        &content,
        args.mode,
        args.source.as_deref(),
        user,
    )
    .with_context(|| format!("failed to import {}", args.file))?;
    handle.save()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    match outcome {
        ImportOutcome::Empty => println!("{} {} is empty", "--".dimmed(), args.file),
        ImportOutcome::MyLyrics {
            patterns_stored,
            avg_syllables,
            top_vocabulary,
            ..
        } => {
            if patterns_stored == 0 {
                println!("{} already imported", "--".dimmed());
            } else {
                println!("{} {patterns_stored} style patterns", "Stored".green().bold());
            }
            println!("{}: {avg_syllables:.1}", "Syllables per line".dimmed());
            println!("{}: {}", "Top words".dimmed(), top_vocabulary.join(", "));
        }
        ImportOutcome::Reference {
            lines_added,
            words_added,
            avg_syllables,
            ..
        } => {
            println!(
                "{} {lines_added} lines, {words_added} new words",
                "Imported".green().bold()
            );
            println!("{}: {avg_syllables:.1}", "Syllables per line".dimmed());
        }
    }
    Ok(())
}
