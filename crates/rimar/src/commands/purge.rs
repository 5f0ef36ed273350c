//! Purge command: remove everything one source contributed.

use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::store::LyricStore;
use tracing::{info, instrument};

use super::StoreHandle;

/// Arguments for the `purge` subcommand.
#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Source tag given at ingest time.
    pub source: String,
}

/// Delete all words and lines tagged with a source.
#[instrument(name = "cmd_purge", skip_all, fields(source = %args.source))]
pub fn cmd_purge(args: PurgeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let handle = StoreHandle::open(config)?;
    let report = handle.store.purge_source(&args.source)?;
    handle.save()?;
    info!(words = report.words, lines = report.lines, "purged source");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} words and {} lines from {}",
            "Removed".green().bold(),
            report.words,
            report.lines,
            args.source.bold(),
        );
    }
    Ok(())
}
