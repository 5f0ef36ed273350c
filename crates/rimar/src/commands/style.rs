//! Style command: vocabulary, rhyme endings, and line length of lyrics.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::config::Config;
use rimar_core::style::{StyleAnalysis, analyze, store_style_patterns, style_context};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{StoreHandle, read_input_file};

/// Arguments for the `style` subcommand.
#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["file", "context"])))]
pub struct StyleArgs {
    /// Lyrics file to analyze.
    pub file: Option<Utf8PathBuf>,

    /// Store the analysis as style patterns.
    #[arg(long, requires = "file")]
    pub save: bool,

    /// Print the stored style summary instead of analyzing a file.
    #[arg(long)]
    pub context: bool,

    /// Owner of the style patterns (overrides `user_id`).
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Serialize)]
struct StyleOutput<'a> {
    #[serde(flatten)]
    analysis: &'a StyleAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    patterns_stored: Option<usize>,
}

/// Analyze a lyrics file, or print the stored style summary.
#[instrument(name = "cmd_style", skip_all)]
pub fn cmd_style(
    args: StyleArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let user = args.user.as_deref().unwrap_or(&config.user_id);

    if args.context {
        let handle = StoreHandle::open(config)?;
        let summary = style_context(&handle.store, user)?;
        if global_json {
            println!("{}", serde_json::json!({ "user_id": user, "context": summary }));
        } else if summary.is_empty() {
            println!("{} no style stored for {user}", "--".dimmed());
        } else {
            println!("{summary}");
        }
        return Ok(());
    }

    let Some(path) = args.file else {
        anyhow::bail!("a lyrics file is required");
    };
    let content = read_input_file(&path, max_input_bytes)?;
    let analysis = analyze(&content);
    debug!(
        vocabulary = analysis.vocabulary.len(),
        lines = analysis.rhyme_ending_sequence.len(),
        "style analyzed"
    );

    let patterns_stored = if args.save {
        let handle = StoreHandle::open(config)?;
        let stored = store_style_patterns(&handle.store, &content, &analysis, user)?;
        handle.save()?;
        Some(stored)
    } else {
        None
    };

    if global_json {
        let output = StyleOutput {
            analysis: &analysis,
            patterns_stored,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}: {:.1}",
        "Syllables per line".bold(),
        analysis.avg_syllables_per_line
    );
    println!("{}:", "Vocabulary".bold());
    for entry in analysis.vocabulary.iter().take(10) {
        println!("  {} {}", format!("{:>3}", entry.count).cyan(), entry.word);
    }
    println!(
        "{}: {}",
        "Rhyme endings".bold(),
        analysis
            .rhyme_ending_sequence
            .iter()
            .map(|e| if e.is_empty() { "-" } else { e.as_str() })
            .collect::<Vec<_>>()
            .join(" ")
    );
    match patterns_stored {
        Some(0) => println!("{} already stored for {user}", "--".dimmed()),
        Some(n) => println!("{} {n} style patterns for {user}", "Stored".green().bold()),
        None => {}
    }
    Ok(())
}
