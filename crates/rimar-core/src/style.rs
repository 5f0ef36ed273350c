//! Style fingerprinting: vocabulary, end-rhyme habits, and line length.
//!
//! [`analyze`] is pure. [`store_style_patterns`] persists the result once per
//! distinct text and user, keyed by a SHA-256 fingerprint of the exact input.

use std::collections::HashMap;

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dictionaries::stop_words::is_stop_word;
use crate::error::{CoreError, CoreResult};
use crate::phonetics::rhyme_group;
use crate::store::{LyricStore, PatternType, StylePattern};
use crate::syllables::count_line;
use crate::text::{extract_words, last_word, split_lines};

/// Vocabulary entries kept per analysis.
pub const VOCABULARY_SIZE: usize = 30;

/// Rhyme endings persisted per analysis.
pub const RHYME_PATTERN_COUNT: usize = 10;

/// Words shown in the generation context.
pub const CONTEXT_VOCABULARY_SIZE: usize = 10;

/// Key of the stored average-syllables pattern.
pub const AVG_SYLLABLES_KEY: &str = "avg_syllables_per_line";

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyEntry {
    /// Lowercased word.
    pub word: String,
    /// Occurrences in the analyzed text.
    pub count: usize,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleAnalysis {
    /// Most frequent content words, most frequent first.
    pub vocabulary: Vec<VocabularyEntry>,
    /// Rhyme group of each non-blank line's last word, in line order.
    pub rhyme_ending_sequence: Vec<String>,
    /// Mean syllables per non-blank line, one decimal.
    pub avg_syllables_per_line: f64,
}

impl StyleAnalysis {
    /// The first `n` vocabulary words.
    pub fn top_words(&self, n: usize) -> Vec<&str> {
        self.vocabulary.iter().take(n).map(|e| e.word.as_str()).collect()
    }
}

/// Count items, keeping first-seen order, then sort by count descending.
/// The sort is stable, so ties stay in encounter order.
fn ranked<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Analyze a body of lyrics.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str) -> StyleAnalysis {
    let lines = split_lines(text);
    if lines.is_empty() {
        return StyleAnalysis::default();
    }

    let vocabulary = ranked(
        extract_words(text)
            .into_iter()
            .filter(|w| w.chars().count() > 1 && !is_stop_word(w)),
    )
    .into_iter()
    .take(VOCABULARY_SIZE)
    .map(|(word, count)| VocabularyEntry { word, count })
    .collect();

    let rhyme_ending_sequence = lines
        .iter()
        .map(|line| last_word(line).map(rhyme_group).unwrap_or_default())
        .collect();

    let total: usize = lines.iter().map(|line| count_line(line)).sum();
    let avg_syllables_per_line = round1(total as f64 / lines.len() as f64);

    StyleAnalysis {
        vocabulary,
        rhyme_ending_sequence,
        avg_syllables_per_line,
    }
}

/// First 16 hex digits of the SHA-256 of `text`.
pub fn text_fingerprint(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    format!("{hash:x}")[..16].to_string()
}

/// Persist `analysis` of `text` for `user_id`. Returns the number of patterns
/// stored, which is zero when this exact text was already stored for the user.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] for an empty `user_id`, or a
/// collaborator error if the store fails.
#[tracing::instrument(skip_all, fields(text_len = text.len(), user_id = %user_id))]
pub fn store_style_patterns(
    store: &dyn LyricStore,
    text: &str,
    analysis: &StyleAnalysis,
    user_id: &str,
) -> CoreResult<usize> {
    if user_id.trim().is_empty() {
        return Err(CoreError::invalid("user_id", "must not be empty"));
    }
    let hash = text_fingerprint(text);
    if store.has_style_patterns(user_id, &hash)? {
        tracing::debug!(hash = %hash, "text already analyzed");
        return Ok(0);
    }

    let now = Utc::now();
    let pattern = |pattern_type, key: &str, value: f64| StylePattern {
        user_id: user_id.to_string(),
        pattern_type,
        key: key.to_string(),
        value,
        source_text_hash: hash.clone(),
        created_at: now,
    };

    let mut patterns: Vec<StylePattern> = analysis
        .vocabulary
        .iter()
        .map(|e| pattern(PatternType::VocabularyFrequency, &e.word, e.count as f64))
        .collect();

    if analysis.avg_syllables_per_line > 0.0 {
        patterns.push(pattern(
            PatternType::AverageSyllables,
            AVG_SYLLABLES_KEY,
            analysis.avg_syllables_per_line,
        ));
    }

    let endings = ranked(
        analysis
            .rhyme_ending_sequence
            .iter()
            .filter(|e| !e.is_empty())
            .cloned(),
    );
    patterns.extend(
        endings
            .into_iter()
            .take(RHYME_PATTERN_COUNT)
            .map(|(ending, count)| {
                pattern(PatternType::RhymeEndingFrequency, &ending, count as f64)
            }),
    );

    let stored = patterns.len();
    // a concurrent call may have stored the same text since the check
    if !store.insert_style_patterns(user_id, &hash, patterns)? {
        tracing::debug!(hash = %hash, "text already analyzed");
        return Ok(0);
    }
    tracing::debug!(stored, hash = %hash, "style patterns stored");
    Ok(stored)
}

/// Render a user's stored style as a short Bulgarian prompt fragment.
///
/// Empty when nothing is stored for the user.
///
/// # Errors
///
/// Returns a collaborator error if the store fails.
pub fn style_context(store: &dyn LyricStore, user_id: &str) -> CoreResult<String> {
    let patterns = store.style_patterns(user_id)?;

    let mut vocabulary: Vec<&StylePattern> = patterns
        .iter()
        .filter(|p| p.pattern_type == PatternType::VocabularyFrequency)
        .collect();
    vocabulary.sort_by(|a, b| b.value.total_cmp(&a.value));
    let top: Vec<&str> = vocabulary
        .iter()
        .take(CONTEXT_VOCABULARY_SIZE)
        .map(|p| p.key.as_str())
        .collect();

    let avg = patterns
        .iter()
        .find(|p| p.pattern_type == PatternType::AverageSyllables)
        .map(|p| p.value)
        .filter(|v| *v > 0.0);

    let mut parts = Vec::new();
    if !top.is_empty() {
        parts.push(format!("Често използвани думи: {}", top.join(", ")));
    }
    if let Some(avg) = avg {
        parts.push(format!("Среден брой срички на ред: {avg:.1}"));
    }
    Ok(parts.join("\n"))
}
