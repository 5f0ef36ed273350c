//! Ingest command: add lyrics to the corpus.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::corpus::{IngestOptions, IngestReport, ingest};
use rimar_core::themes::KeywordThemes;
use tracing::{debug, instrument};

use super::{StoreHandle, read_input_file};

/// Arguments for the `ingest` subcommand.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Lyrics file. Bracketed headers like `[Припев]` mark sections.
    pub file: Utf8PathBuf,

    /// Provenance tag (artist or song), used by `purge`.
    #[arg(short, long)]
    pub source: Option<String>,

    /// Identifier of the song the lines belong to.
    #[arg(long)]
    pub song_id: Option<u64>,
}

/// Ingest a lyrics file into the corpus and rhyme pool.
#[instrument(name = "cmd_ingest", skip_all, fields(file = %args.file))]
pub fn cmd_ingest(
    args: IngestArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(source = ?args.source, song_id = ?args.song_id, "executing ingest command");
    let content = read_input_file(&args.file, max_input_bytes)?;

    let handle = StoreHandle::open(config)?;
    let opts = IngestOptions {
        source: args.source,
        song_id: args.song_id,
        section_hints: None,
    };
    let report = ingest(&handle.store, &KeywordThemes, &content, &opts)
        .with_context(|| format!("failed to ingest {}", args.file))?;
    handle.save()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &IngestReport) {
    println!(
        "{} {} lines, {} new words, {} sections",
        "Ingested".green().bold(),
        report.lines_added,
        report.words_added,
        report.sections_found,
    );
    for (theme, count) in &report.themes_detected {
        println!("  {}: {}", theme.to_string().cyan(), count);
    }
}
