//! Seed command: load the built-in vocabulary into the rhyme pool.

use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::seed_words;
use rimar_core::store::LyricStore;
use tracing::instrument;

use super::StoreHandle;

/// Arguments for the `seed` subcommand.
#[derive(Args, Debug)]
pub struct SeedArgs {}

/// Insert seed words that are not in the pool yet.
#[instrument(name = "cmd_seed", skip_all)]
pub fn cmd_seed(_args: SeedArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let handle = StoreHandle::open(config)?;
    let report = seed_words(&handle.store)?;
    handle.save()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} words ({} already present, {} in pool)",
            "Seeded".green().bold(),
            report.added,
            report.skipped,
            handle.store.word_count()?,
        );
    }
    Ok(())
}
