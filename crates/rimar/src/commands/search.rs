//! Search command: filter stored corpus lines.

use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::corpus::{context_lines, search_lines, search_rhyming_lines};
use rimar_core::sections::Section;
use rimar_core::store::{CorpusLine, LineFilter};
use rimar_core::themes::Theme;
use tracing::{debug, instrument};

use super::StoreHandle;

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Only lines with this theme.
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Only lines with exactly this many syllables.
    #[arg(short, long)]
    pub syllables: Option<usize>,

    /// Only lines with this rhyme group (e.g. `O:ф`).
    #[arg(long, conflicts_with = "rhymes_with")]
    pub ending: Option<String>,

    /// Only lines whose last word rhymes perfectly with WORD.
    #[arg(long, value_name = "WORD")]
    pub rhymes_with: Option<String>,

    /// Only lines from this section.
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Case-insensitive substring the line must contain.
    #[arg(long)]
    pub query: Option<String>,

    /// Maximum lines to return (overrides `corpus_search_limit`).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print N example lines for `--theme` as plain text.
    #[arg(long, value_name = "N", requires = "theme")]
    pub examples: Option<usize>,
}

/// Search the corpus.
#[instrument(name = "cmd_search", skip_all)]
pub fn cmd_search(args: SearchArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let handle = StoreHandle::open(config)?;

    if let (Some(count), Some(theme)) = (args.examples, args.theme) {
        debug!(%theme, count, "fetching context lines");
        let lines = context_lines(&handle.store, theme, count)?;
        if global_json {
            println!("{}", serde_json::to_string_pretty(&lines)?);
        } else {
            for line in &lines {
                println!("{line}");
            }
        }
        return Ok(());
    }

    let filter = LineFilter {
        theme: args.theme,
        syllables: args.syllables,
        rhyme_ending: args.ending,
        section: args.section,
        query: args.query,
    };
    let limit = args.limit.unwrap_or(config.corpus_search_limit);
    debug!(?filter, limit, "executing search command");

    let lines = match args.rhymes_with {
        Some(ref word) => search_rhyming_lines(&handle.store, filter, word, limit)?,
        None => search_lines(&handle.store, &filter, limit)?,
    };
    if global_json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else if lines.is_empty() {
        println!("{} no matching lines", "--".dimmed());
    } else {
        for line in &lines {
            print_line(line);
        }
    }
    Ok(())
}

fn print_line(line: &CorpusLine) {
    let mut tags = vec![format!("{} syl", line.syllables)];
    if let Some(theme) = line.theme {
        tags.push(theme.to_string());
    }
    if let Some(section) = line.section {
        tags.push(section.to_string());
    }
    if let Some(ref source) = line.source {
        tags.push(source.clone());
    }
    println!("{}  {}", line.text, format!("[{}]", tags.join(", ")).dimmed());
}
