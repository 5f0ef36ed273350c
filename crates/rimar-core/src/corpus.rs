//! Corpus ingestion, word mining, and line search.
//!
//! Ingestion turns pasted lyrics into tagged [`CorpusLine`] records and
//! feeds every new Bulgarian word of three or more letters into the rhyme
//! pool. Foreign or malformed input never fails; it just yields lines tagged
//! `other`/`unknown` with an empty phonetic ending.

use std::collections::BTreeMap;

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::phonetics::rhyme_group;
use crate::sections::{Section, SectionHint, split_sections};
use crate::store::{CorpusLine, LineFilter, LyricStore, RhymeableWord};
use crate::syllables::count_line;
use crate::text::{Language, detect_language, last_word, unique_target_words};
use crate::themes::{Theme, ThemeDetector};

/// Shortest word worth adding to the rhyme pool.
pub const MIN_WORD_LENGTH: usize = 3;

/// Default cap for [`search_lines`] callers that have no configured limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Provenance and structure supplied alongside ingested text.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Provenance tag stored on every line and mined word.
    pub source: Option<String>,
    /// Imported song the lines belong to.
    pub song_id: Option<u64>,
    /// Pre-split sections. When set, these are the lines ingested and
    /// bracketed headers in the text are not parsed.
    pub section_hints: Option<Vec<SectionHint>>,
}

/// Aggregate counts for one ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IngestReport {
    /// Corpus lines stored.
    pub lines_added: usize,
    /// Lines per detected theme.
    pub themes_detected: BTreeMap<Theme, usize>,
    /// New words added to the rhyme pool.
    pub words_added: usize,
    /// Non-empty section blocks seen.
    pub sections_found: usize,
}

fn tag_line(
    themes: &dyn ThemeDetector,
    text: &str,
    section: Section,
    opts: &IngestOptions,
) -> CoreResult<CorpusLine> {
    let language = detect_language(text);
    let phonetic_ending = match language {
        Language::Bg => last_word(text).map(rhyme_group).unwrap_or_default(),
        Language::Other | Language::Unknown => String::new(),
    };
    Ok(CorpusLine {
        text: text.to_string(),
        source: opts.source.clone(),
        song_id: opts.song_id,
        language,
        theme: themes.detect_theme(text)?,
        section: Some(section),
        syllables: count_line(text),
        phonetic_ending,
        created_at: Utc::now(),
    })
}

/// Add every unseen word of `text` to the pool. Returns how many were new.
fn mine_words(
    store: &dyn LyricStore,
    themes: &dyn ThemeDetector,
    text: &str,
    source: Option<&str>,
) -> CoreResult<usize> {
    let mut added = 0;
    for word in unique_target_words(text, MIN_WORD_LENGTH) {
        if store.find_word(&word)?.is_some() {
            continue;
        }
        let theme = themes.detect_theme(&word)?;
        // a concurrent writer may have won the race since the lookup
        if store.insert_word(RhymeableWord::analyze(&word, theme, source))? {
            added += 1;
        }
    }
    Ok(added)
}

/// Ingest lyrics into the corpus and mine their words into the rhyme pool.
///
/// Blank lines are skipped. Without section hints, bracketed headers such as
/// `[Припев]` assign the section of the lines below them; everything else is
/// [`Section::Verse`].
///
/// Mining scans the whole of `text`, header lines included, plus the lines of
/// any section hints. Lines are stored before words, so a failed line insert
/// leaves the word pool untouched.
///
/// # Errors
///
/// Only collaborator failures (store, theme detector) are returned.
#[tracing::instrument(skip_all, fields(text_len = text.len(), source = ?opts.source))]
pub fn ingest(
    store: &dyn LyricStore,
    themes: &dyn ThemeDetector,
    text: &str,
    opts: &IngestOptions,
) -> CoreResult<IngestReport> {
    let blocks: Vec<SectionHint> = match &opts.section_hints {
        Some(hints) => hints
            .iter()
            .map(|h| SectionHint {
                section: h.section,
                lines: h
                    .lines
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
            })
            .filter(|h| !h.lines.is_empty())
            .collect(),
        None => split_sections(text),
    };

    let mut report = IngestReport {
        sections_found: blocks.len(),
        ..IngestReport::default()
    };

    let mut lines = Vec::new();
    for block in &blocks {
        for text in &block.lines {
            let line = tag_line(themes, text, block.section, opts)?;
            if let Some(theme) = line.theme {
                *report.themes_detected.entry(theme).or_default() += 1;
            }
            lines.push(line);
        }
    }
    report.lines_added = lines.len();
    if !lines.is_empty() {
        store.insert_lines(lines)?;
    }

    let mut mined = text.to_string();
    for block in opts.section_hints.iter().flatten() {
        for line in &block.lines {
            mined.push('\n');
            mined.push_str(line);
        }
    }
    report.words_added = mine_words(store, themes, &mined, opts.source.as_deref())?;

    tracing::info!(
        lines_added = report.lines_added,
        words_added = report.words_added,
        sections_found = report.sections_found,
        "ingestion complete"
    );
    Ok(report)
}

/// Corpus lines matching `filter`, at most `limit` of them.
///
/// # Errors
///
/// Returns a collaborator error if the store fails.
pub fn search_lines(
    store: &dyn LyricStore,
    filter: &LineFilter,
    limit: usize,
) -> CoreResult<Vec<CorpusLine>> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    let found = store.search_lines(filter, limit)?;
    tracing::debug!(found = found.len(), "corpus search");
    Ok(found)
}

/// [`search_lines`] restricted to lines whose last word rhymes perfectly with
/// `word`. A word with no Bulgarian letters rhymes with nothing, so the result
/// is empty.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `filter` already sets a rhyme
/// ending, or a collaborator error if the store fails.
pub fn search_rhyming_lines(
    store: &dyn LyricStore,
    filter: LineFilter,
    word: &str,
    limit: usize,
) -> CoreResult<Vec<CorpusLine>> {
    if filter.rhyme_ending.is_some() {
        return Err(CoreError::invalid(
            "rhymes_with",
            "cannot be combined with rhyme_ending",
        ));
    }
    let group = rhyme_group(word);
    if group.is_empty() {
        tracing::debug!(word, "word has no rhyme group");
        return Ok(Vec::new());
    }
    let filter = LineFilter {
        rhyme_ending: Some(group),
        ..filter
    };
    search_lines(store, &filter, limit)
}

/// Up to `count` line texts for `theme`, as few-shot examples for generation.
///
/// # Errors
///
/// Returns a collaborator error if the store fails.
pub fn context_lines(store: &dyn LyricStore, theme: Theme, count: usize) -> CoreResult<Vec<String>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let filter = LineFilter {
        theme: Some(theme),
        ..LineFilter::default()
    };
    Ok(store
        .search_lines(&filter, count)?
        .into_iter()
        .map(|l| l.text)
        .collect())
}
