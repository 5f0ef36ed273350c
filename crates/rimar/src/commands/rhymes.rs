//! Rhymes command: tiered rhyme suggestions from the word pool.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::rhymes::{RhymeBuckets, find_rhymes, find_rhymes_in_store};
use tracing::{debug, instrument};

use super::StoreHandle;

/// Arguments for the `rhymes` subcommand.
#[derive(Args, Debug)]
pub struct RhymesArgs {
    /// Word to rhyme.
    pub word: String,

    /// Suggestions per tier (overrides `rhyme_limit`).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Candidate words to use instead of the stored pool.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub candidates: Option<Vec<String>>,
}

/// Print rhyme suggestions for a word.
#[instrument(name = "cmd_rhymes", skip_all, fields(word = %args.word))]
pub fn cmd_rhymes(args: RhymesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(config.rhyme_limit);
    debug!(limit, "executing rhymes command");

    let buckets = match args.candidates {
        Some(ref pool) => find_rhymes(&args.word, pool, limit)?,
        None => {
            let handle = StoreHandle::open(config)?;
            find_rhymes_in_store(&args.word, &handle.store, limit)
                .with_context(|| format!("failed to find rhymes for {}", args.word))?
        }
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
    } else {
        print_buckets(&args.word, &buckets);
    }
    Ok(())
}

fn print_buckets(word: &str, buckets: &RhymeBuckets) {
    if buckets.is_empty() {
        println!("{} no rhymes for {}", "--".dimmed(), word.bold());
        return;
    }
    print_tier("Perfect", &buckets.perfect);
    print_tier("Near", &buckets.near);
    print_tier("Slant", &buckets.slant);
}

fn print_tier(label: &str, words: &[String]) {
    if words.is_empty() {
        println!("{}: {}", label.bold(), "-".dimmed());
    } else {
        println!("{}: {}", label.bold(), words.join(", ").green());
    }
}
