//! Text import in two modes: the user's own lyrics, or reference material.

use std::collections::BTreeMap;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::corpus::{IngestOptions, ingest};
use crate::error::{CoreError, CoreResult};
use crate::store::LyricStore;
use crate::style::{analyze, store_style_patterns};
use crate::themes::{Theme, ThemeDetector};

/// Words listed in a my-lyrics import summary.
const SUMMARY_VOCABULARY_SIZE: usize = 10;

/// What an import is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ImportMode {
    /// The user's own writing: learn style only.
    #[default]
    MyLyrics,
    /// Someone else's lyrics: add to the corpus and learn style.
    Reference,
}

impl FromStr for ImportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "my_lyrics" => Ok(Self::MyLyrics),
            "reference" => Ok(Self::Reference),
            other => Err(CoreError::invalid(
                "mode",
                format!("expected `my_lyrics` or `reference`, got `{other}`"),
            )),
        }
    }
}

/// Result of [`import_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// Nothing but whitespace was submitted.
    Empty,
    /// Style was learned from the user's own lyrics.
    MyLyrics {
        /// Patterns stored; zero if this text was imported before.
        patterns_stored: usize,
        /// Mean syllables per line.
        avg_syllables: f64,
        /// Most frequent words.
        top_vocabulary: Vec<String>,
        /// Lines whose ending was recorded.
        rhyme_patterns_found: usize,
    },
    /// Reference lyrics were added to the corpus.
    Reference {
        /// Corpus lines stored.
        lines_added: usize,
        /// New rhyme-pool words.
        words_added: usize,
        /// Lines per detected theme.
        themes_detected: BTreeMap<Theme, usize>,
        /// Mean syllables per line.
        avg_syllables: f64,
    },
}

/// Import `text` in the given mode.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] for an empty `user_id`, or a
/// collaborator error if the store or theme detector fails.
#[tracing::instrument(skip_all, fields(text_len = text.len(), mode = ?mode))]
pub fn import_text(
    store: &dyn LyricStore,
    themes: &dyn ThemeDetector,
    text: &str,
    mode: ImportMode,
    source: Option<&str>,
    user_id: &str,
) -> CoreResult<ImportOutcome> {
    if text.trim().is_empty() {
        return Ok(ImportOutcome::Empty);
    }

    match mode {
        ImportMode::MyLyrics => {
            let analysis = analyze(text);
            let patterns_stored = store_style_patterns(store, text, &analysis, user_id)?;
            Ok(ImportOutcome::MyLyrics {
                patterns_stored,
                avg_syllables: analysis.avg_syllables_per_line,
                top_vocabulary: analysis
                    .top_words(SUMMARY_VOCABULARY_SIZE)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                rhyme_patterns_found: analysis.rhyme_ending_sequence.len(),
            })
        }
        ImportMode::Reference => {
            let opts = IngestOptions {
                source: source.map(str::to_string),
                ..IngestOptions::default()
            };
            let report = ingest(store, themes, text, &opts)?;
            let analysis = analyze(text);
            store_style_patterns(store, text, &analysis, user_id)?;
            Ok(ImportOutcome::Reference {
                lines_added: report.lines_added,
                words_added: report.words_added,
                themes_detected: report.themes_detected,
                avg_syllables: analysis.avg_syllables_per_line,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LineFilter, MemoryStore};
    use crate::themes::KeywordThemes;

    const TEXT: &str = "Имам пари да хвърлям\nНяма любов";

    #[test]
    fn parse_modes() {
        assert_eq!("my_lyrics".parse::<ImportMode>().unwrap(), ImportMode::MyLyrics);
        assert_eq!("My-Lyrics".parse::<ImportMode>().unwrap(), ImportMode::MyLyrics);
        assert_eq!("reference".parse::<ImportMode>().unwrap(), ImportMode::Reference);
        assert!(matches!(
            "study".parse::<ImportMode>(),
            Err(CoreError::InvalidArgument { name: "mode", .. })
        ));
    }

    #[test]
    fn empty_text_is_empty_outcome() {
        let store = MemoryStore::new();
        let outcome =
            import_text(&store, &KeywordThemes, " \n", ImportMode::Reference, None, "default")
                .unwrap();
        assert_eq!(outcome, ImportOutcome::Empty);
    }

    #[test]
    fn my_lyrics_stores_style_only() {
        let store = MemoryStore::new();
        let outcome =
            import_text(&store, &KeywordThemes, TEXT, ImportMode::MyLyrics, None, "default")
                .unwrap();
        let ImportOutcome::MyLyrics {
            patterns_stored,
            avg_syllables,
            top_vocabulary,
            rhyme_patterns_found,
        } = outcome
        else {
            panic!("expected my-lyrics outcome");
        };
        assert!(patterns_stored > 0);
        assert!((avg_syllables - 5.5).abs() < 1e-9);
        assert_eq!(top_vocabulary[0], "имам");
        assert_eq!(rhyme_patterns_found, 2);
        assert!(store.search_lines(&LineFilter::default(), 10).unwrap().is_empty());
        assert_eq!(store.word_count().unwrap(), 0);
    }

    #[test]
    fn reference_feeds_corpus_and_style() {
        let store = MemoryStore::new();
        let outcome = import_text(
            &store,
            &KeywordThemes,
            TEXT,
            ImportMode::Reference,
            Some("azis"),
            "default",
        )
        .unwrap();
        let ImportOutcome::Reference {
            lines_added,
            words_added,
            themes_detected,
            ..
        } = outcome
        else {
            panic!("expected reference outcome");
        };
        assert_eq!(lines_added, 2);
        assert_eq!(words_added, 5);
        assert!(themes_detected.contains_key(&Theme::Money));
        assert!(!store.style_patterns("default").unwrap().is_empty());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(ImportOutcome::Empty).unwrap();
        assert_eq!(json["status"], "empty");
    }
}
