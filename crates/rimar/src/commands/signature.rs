//! Signature command: the phonetic rhyme key of each word.

use clap::Args;
use owo_colors::OwoColorize;
use rimar_core::phonetics::{PhoneticSignature, extract_signature};
use serde::Serialize;
use tracing::instrument;

/// Arguments for the `signature` subcommand.
#[derive(Args, Debug)]
pub struct SignatureArgs {
    /// Words to analyze.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct WordSignature {
    word: String,
    #[serde(flatten)]
    signature: PhoneticSignature,
}

/// Print the phonetic signature of each word.
#[instrument(name = "cmd_signature", skip_all, fields(count = args.words.len()))]
pub fn cmd_signature(args: SignatureArgs, global_json: bool) -> anyhow::Result<()> {
    let signatures: Vec<WordSignature> = args
        .words
        .into_iter()
        .map(|word| {
            let signature = extract_signature(&word);
            WordSignature { word, signature }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&signatures)?);
        return Ok(());
    }
    for entry in &signatures {
        let sig = &entry.signature;
        if sig.is_empty() {
            println!("{}  {}", entry.word.bold(), "(no Bulgarian letters)".dimmed());
            continue;
        }
        println!(
            "{}  group={} ending={} vowel={} frame={}",
            entry.word.bold(),
            sig.rhyme_group.green(),
            sig.ending,
            sig.vowel_class,
            sig.consonant_frame,
        );
    }
    Ok(())
}
