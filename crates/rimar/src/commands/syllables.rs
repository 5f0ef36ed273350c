//! Syllables command: per-word and per-line syllable counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::syllables::{SyllableBreakdown, breakdown};
use rimar_core::text::split_lines;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{check_input_size, read_input_file};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Text to count (joined with spaces).
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Vec<String>,

    /// Count every line of a file instead.
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct LineCount<'a> {
    line: &'a str,
    syllables: usize,
}

/// Count syllables in the given text or in each line of a file.
#[instrument(name = "cmd_syllables", skip_all)]
pub fn cmd_syllables(
    args: SyllablesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    if let Some(ref path) = args.file {
        debug!(file = %path, "counting syllables per line");
        let content = read_input_file(path, max_input_bytes)?;
        let counts: Vec<LineCount<'_>> = split_lines(&content)
            .into_iter()
            .map(|line| LineCount {
                line,
                syllables: breakdown(line).total,
            })
            .collect();
        if global_json {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        } else {
            for count in &counts {
                println!("{}  {}", format!("{:>3}", count.syllables).cyan(), count.line);
            }
        }
        return Ok(());
    }

    let text = args.text.join(" ");
    check_input_size(&text, max_input_bytes)?;
    let report = breakdown(&text);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_breakdown(&report);
    }
    Ok(())
}

fn print_breakdown(report: &SyllableBreakdown) {
    let words: Vec<String> = report
        .per_word
        .iter()
        .map(|w| format!("{}({})", w.word, w.count))
        .collect();
    println!("{} {}", report.total.bold(), words.join(" ").dimmed());
}
