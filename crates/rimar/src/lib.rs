//! Library interface for the `rimar` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, rimar=trace)
    RIMAR_LOG_PATH         Explicit log file path
    RIMAR_LOG_DIR          Log directory
    RIMAR_STORE_PATH       Store snapshot file
    RIMAR_RHYME_LIMIT      Suggestions per rhyme tier
    RIMAR_USER_ID          Owner of stored style patterns
";

/// Command-line interface definition for rimar.
#[derive(Parser)]
#[command(name = "rimar")]
#[command(
    about = "Rhymes, syllable counts, and lyric corpus mining for Bulgarian songwriting",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Suggest perfect, near, and slant rhymes for a word
    Rhymes(commands::rhymes::RhymesArgs),

    /// Count syllables in text
    Syllables(commands::syllables::SyllablesArgs),

    /// Show the phonetic signature of words
    Signature(commands::signature::SignatureArgs),

    /// Add lyrics to the corpus and mine their words
    Ingest(commands::ingest::IngestArgs),

    /// Import lyrics as your own writing or as reference material
    Import(commands::import::ImportArgs),

    /// Search corpus lines
    Search(commands::search::SearchArgs),

    /// Analyze writing style
    Style(commands::style::StyleArgs),

    /// Add the built-in vocabulary to the rhyme pool
    Seed(commands::seed::SeedArgs),

    /// Delete all words and lines from one source
    Purge(commands::purge::PurgeArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_rhymes_with_limit() {
        let cli = Cli::try_parse_from(["rimar", "rhymes", "любов", "--limit", "5"]).unwrap();
        let Some(Commands::Rhymes(args)) = cli.command else {
            panic!("expected rhymes command");
        };
        assert_eq!(args.word, "любов");
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn global_json_after_subcommand() {
        let cli = Cli::try_parse_from(["rimar", "signature", "нощ", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn search_ending_conflicts_with_rhymes_with() {
        let result = Cli::try_parse_from([
            "rimar",
            "search",
            "--ending",
            "O:ф",
            "--rhymes-with",
            "нов",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn import_mode_defaults_to_my_lyrics() {
        let cli = Cli::try_parse_from(["rimar", "import", "song.txt"]).unwrap();
        let Some(Commands::Import(args)) = cli.command else {
            panic!("expected import command");
        };
        assert_eq!(args.mode, rimar_core::ImportMode::MyLyrics);
    }
}
