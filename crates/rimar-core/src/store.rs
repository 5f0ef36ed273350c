//! Persistence boundary: records and the store trait.
//!
//! The algorithms never talk to storage directly. Orchestration code
//! (ingestion, seeding, style persistence, store-backed rhyme lookup) goes
//! through [`LyricStore`], which any backend can implement. [`MemoryStore`]
//! is the bundled backend: in-process, lock-guarded, with an optional JSON
//! snapshot on disk.

use std::collections::HashSet;
use std::sync::RwLock;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::phonetics::extract_signature;
use crate::sections::Section;
use crate::syllables::count_word_syllables;
use crate::text::Language;
use crate::themes::Theme;

/// A word in the rhyme pool. Never updated once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeableWord {
    /// Normalized lowercase word (unique).
    pub word: String,
    /// Substring from the last vowel onward.
    pub phonetic_ending: String,
    /// Perfect-rhyme key.
    pub rhyme_group: String,
    /// Syllable count.
    pub syllable_count: usize,
    /// Theme, if the word itself is a theme keyword.
    pub theme: Option<Theme>,
    /// Where the word was first seen (artist, song, `"seed"`).
    pub source: Option<String>,
    /// When the word was first seen.
    pub created_at: DateTime<Utc>,
}

impl RhymeableWord {
    /// Build a pool entry for an already-normalized `word`, computing its
    /// signature and syllable count.
    pub fn analyze(word: &str, theme: Option<Theme>, source: Option<&str>) -> Self {
        let signature = extract_signature(word);
        Self {
            word: word.to_string(),
            phonetic_ending: signature.ending,
            rhyme_group: signature.rhyme_group,
            syllable_count: count_word_syllables(word),
            theme,
            source: source.map(str::to_string),
            created_at: Utc::now(),
        }
    }
}

/// One ingested lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusLine {
    /// The line text.
    pub text: String,
    /// Provenance tag.
    pub source: Option<String>,
    /// Weak reference to an imported song; lookup only.
    pub song_id: Option<u64>,
    /// Detected script.
    pub language: Language,
    /// Detected theme.
    pub theme: Option<Theme>,
    /// Song section.
    pub section: Option<Section>,
    /// Syllable count of the whole line.
    pub syllables: usize,
    /// Rhyme group of the last word; empty unless the line is Bulgarian.
    pub phonetic_ending: String,
    /// Ingestion time.
    pub created_at: DateTime<Utc>,
}

/// Kind of a stored style observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    /// Word → occurrence count.
    VocabularyFrequency,
    /// Rhyme group → number of lines ending in it.
    RhymeEndingFrequency,
    /// Mean syllables per line.
    AverageSyllables,
}

/// A keyed numeric style observation for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePattern {
    /// Owner.
    pub user_id: String,
    /// What the observation measures.
    pub pattern_type: PatternType,
    /// Word, rhyme group, or fixed key.
    pub key: String,
    /// Observed value.
    pub value: f64,
    /// Fingerprint of the analyzed text.
    pub source_text_hash: String,
    /// Storage time.
    pub created_at: DateTime<Utc>,
}

/// Filters for corpus line search. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilter {
    /// Exact theme.
    pub theme: Option<Theme>,
    /// Exact syllable count.
    pub syllables: Option<usize>,
    /// Exact rhyme group of the last word.
    pub rhyme_ending: Option<String>,
    /// Exact section.
    pub section: Option<Section>,
    /// Case-insensitive substring of the line text.
    pub query: Option<String>,
}

impl LineFilter {
    /// Whether `line` passes every set filter.
    pub fn matches(&self, line: &CorpusLine) -> bool {
        self.theme.is_none_or(|t| line.theme == Some(t))
            && self.syllables.is_none_or(|s| line.syllables == s)
            && self
                .rhyme_ending
                .as_deref()
                .is_none_or(|e| line.phonetic_ending == e)
            && self.section.is_none_or(|s| line.section == Some(s))
            && self.query.as_deref().is_none_or(|q| {
                line.text.to_lowercase().contains(&q.to_lowercase())
            })
    }
}

/// Counts removed by [`LyricStore::purge_source`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    /// Words removed from the rhyme pool.
    pub words: usize,
    /// Corpus lines removed.
    pub lines: usize,
}

/// Storage for the rhyme pool, the corpus, and style patterns.
///
/// Implementations must make [`insert_word`](Self::insert_word) atomic with
/// respect to the uniqueness of `word`, and
/// [`insert_style_patterns`](Self::insert_style_patterns) atomic with respect
/// to `(user_id, source_text_hash)`. The core does no locking of its own.
pub trait LyricStore: Send + Sync {
    /// Exact lookup of a normalized word.
    fn find_word(&self, word: &str) -> StoreResult<Option<RhymeableWord>>;

    /// Insert a word unless it already exists. Returns `true` if inserted.
    fn insert_word(&self, word: RhymeableWord) -> StoreResult<bool>;

    /// Every word in insertion order (the candidate pool).
    fn all_words(&self) -> StoreResult<Vec<RhymeableWord>>;

    /// Number of words in the pool.
    fn word_count(&self) -> StoreResult<usize>;

    /// Append corpus lines.
    fn insert_lines(&self, lines: Vec<CorpusLine>) -> StoreResult<()>;

    /// Up to `limit` lines matching `filter`, in insertion order.
    fn search_lines(&self, filter: &LineFilter, limit: usize) -> StoreResult<Vec<CorpusLine>>;

    /// Whether patterns from the text with this fingerprint exist for `user_id`.
    fn has_style_patterns(&self, user_id: &str, source_text_hash: &str) -> StoreResult<bool>;

    /// Append patterns unless some already exist for this user and text
    /// fingerprint. Returns `true` if inserted.
    fn insert_style_patterns(
        &self,
        user_id: &str,
        source_text_hash: &str,
        patterns: Vec<StylePattern>,
    ) -> StoreResult<bool>;

    /// All patterns stored for `user_id`.
    fn style_patterns(&self, user_id: &str) -> StoreResult<Vec<StylePattern>>;

    /// Delete every word and line whose `source` equals `source`.
    fn purge_source(&self, source: &str) -> StoreResult<PurgeReport>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    words: Vec<RhymeableWord>,
    lines: Vec<CorpusLine>,
    style_patterns: Vec<StylePattern>,
}

#[derive(Debug, Default)]
struct Tables {
    snapshot: Snapshot,
    word_index: HashSet<String>,
}

impl Tables {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        let word_index = snapshot.words.iter().map(|w| w.word.clone()).collect();
        Self {
            snapshot,
            word_index,
        }
    }

    fn has_style_patterns(&self, user_id: &str, source_text_hash: &str) -> bool {
        self.snapshot
            .style_patterns
            .iter()
            .any(|p| p.user_id == user_id && p.source_text_hash == source_text_hash)
    }
}

/// In-memory [`LyricStore`] with optional JSON persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from `path`, or start empty if the file does not exist.
    #[tracing::instrument(fields(path = %path))]
    pub fn open(path: &Utf8Path) -> StoreResult<Self> {
        if !path.exists() {
            tracing::debug!("no snapshot yet, starting empty");
            return Ok(Self::new());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            words = snapshot.words.len(),
            lines = snapshot.lines.len(),
            "snapshot loaded"
        );
        Ok(Self {
            tables: RwLock::new(Tables::from_snapshot(snapshot)),
        })
    }

    /// Write the current contents to `path`, creating parent directories.
    #[tracing::instrument(skip(self), fields(path = %path))]
    pub fn save(&self, path: &Utf8Path) -> StoreResult<()> {
        let io_err = |source| StoreError::Io {
            path: Utf8PathBuf::from(path),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = {
            let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
            serde_json::to_string_pretty(&tables.snapshot)?
        };
        std::fs::write(path, json).map_err(io_err)?;
        tracing::debug!("snapshot saved");
        Ok(())
    }
}

impl LyricStore for MemoryStore {
    fn find_word(&self, word: &str) -> StoreResult<Option<RhymeableWord>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        if !tables.word_index.contains(word) {
            return Ok(None);
        }
        Ok(tables.snapshot.words.iter().find(|w| w.word == word).cloned())
    }

    fn insert_word(&self, word: RhymeableWord) -> StoreResult<bool> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        if !tables.word_index.insert(word.word.clone()) {
            return Ok(false);
        }
        tables.snapshot.words.push(word);
        Ok(true)
    }

    fn all_words(&self) -> StoreResult<Vec<RhymeableWord>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.snapshot.words.clone())
    }

    fn word_count(&self) -> StoreResult<usize> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.snapshot.words.len())
    }

    fn insert_lines(&self, lines: Vec<CorpusLine>) -> StoreResult<()> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables.snapshot.lines.extend(lines);
        Ok(())
    }

    fn search_lines(&self, filter: &LineFilter, limit: usize) -> StoreResult<Vec<CorpusLine>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables
            .snapshot
            .lines
            .iter()
            .filter(|l| filter.matches(l))
            .take(limit)
            .cloned()
            .collect())
    }

    fn has_style_patterns(&self, user_id: &str, source_text_hash: &str) -> StoreResult<bool> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.has_style_patterns(user_id, source_text_hash))
    }

    fn insert_style_patterns(
        &self,
        user_id: &str,
        source_text_hash: &str,
        patterns: Vec<StylePattern>,
    ) -> StoreResult<bool> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        if tables.has_style_patterns(user_id, source_text_hash) {
            return Ok(false);
        }
        tables.snapshot.style_patterns.extend(patterns);
        Ok(true)
    }

    fn style_patterns(&self, user_id: &str) -> StoreResult<Vec<StylePattern>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables
            .snapshot
            .style_patterns
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    fn purge_source(&self, source: &str) -> StoreResult<PurgeReport> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let Tables {
            snapshot,
            word_index,
        } = &mut *tables;

        let words_before = snapshot.words.len();
        snapshot.words.retain(|w| {
            let keep = w.source.as_deref() != Some(source);
            if !keep {
                word_index.remove(&w.word);
            }
            keep
        });
        let lines_before = snapshot.lines.len();
        snapshot
            .lines
            .retain(|l| l.source.as_deref() != Some(source));

        Ok(PurgeReport {
            words: words_before - snapshot.words.len(),
            lines: lines_before - snapshot.lines.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn word(text: &str, source: Option<&str>) -> RhymeableWord {
        RhymeableWord {
            word: text.to_string(),
            phonetic_ending: String::new(),
            rhyme_group: String::new(),
            syllable_count: 1,
            theme: None,
            source: source.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn line(text: &str, source: Option<&str>, theme: Option<Theme>) -> CorpusLine {
        CorpusLine {
            text: text.to_string(),
            source: source.map(str::to_string),
            song_id: None,
            language: Language::Bg,
            theme,
            section: Some(Section::Verse),
            syllables: 7,
            phonetic_ending: "AA:".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_word_is_unique() {
        let store = MemoryStore::new();
        assert!(store.insert_word(word("пари", None)).unwrap());
        assert!(!store.insert_word(word("пари", Some("other"))).unwrap());
        assert_eq!(store.word_count().unwrap(), 1);
        assert!(store.find_word("пари").unwrap().is_some());
        assert!(store.find_word("нощ").unwrap().is_none());
    }

    #[test]
    fn all_words_keeps_insertion_order() {
        let store = MemoryStore::new();
        for w in ["вари", "пари", "цари"] {
            store.insert_word(word(w, None)).unwrap();
        }
        let words: Vec<_> = store.all_words().unwrap().into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["вари", "пари", "цари"]);
    }

    #[test]
    fn concurrent_inserts_keep_words_unique() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    ["пари", "нощ", "любов"]
                        .into_iter()
                        .filter(|w| store.insert_word(word(w, None)).unwrap())
                        .count()
                })
            })
            .collect();
        let inserted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(inserted, 3);
        assert_eq!(store.word_count().unwrap(), 3);
    }

    fn pattern(user_id: &str, hash: &str) -> StylePattern {
        StylePattern {
            user_id: user_id.to_string(),
            pattern_type: PatternType::AverageSyllables,
            key: "avg_syllables".to_string(),
            value: 7.0,
            source_text_hash: hash.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn concurrent_style_inserts_store_once_per_user() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let user = if i % 2 == 0 { "ana" } else { "boris" };
                std::thread::spawn(move || {
                    store
                        .insert_style_patterns(user, "abc", vec![pattern(user, "abc")])
                        .unwrap()
                })
            })
            .collect();
        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&b| b)
            .count();
        assert_eq!(inserted, 2);
        assert_eq!(store.style_patterns("ana").unwrap().len(), 1);
        assert_eq!(store.style_patterns("boris").unwrap().len(), 1);
        assert!(store.has_style_patterns("ana", "abc").unwrap());
        assert!(!store.has_style_patterns("ana", "def").unwrap());
    }

    #[test]
    fn line_filter_combines_conditions() {
        let store = MemoryStore::new();
        store
            .insert_lines(vec![
                line("Имам пари да хвърлям", None, Some(Theme::Money)),
                line("Тихо е навън", None, None),
            ])
            .unwrap();

        let filter = LineFilter {
            theme: Some(Theme::Money),
            syllables: Some(7),
            ..LineFilter::default()
        };
        let found = store.search_lines(&filter, 50).unwrap();
        assert_eq!(found.len(), 1);

        let filter = LineFilter {
            query: Some("НАВЪН".to_string()),
            ..LineFilter::default()
        };
        assert_eq!(store.search_lines(&filter, 50).unwrap()[0].text, "Тихо е навън");
        assert_eq!(store.search_lines(&LineFilter::default(), 1).unwrap().len(), 1);
    }

    #[test]
    fn purge_removes_only_matching_source() {
        let store = MemoryStore::new();
        store.insert_word(word("пари", Some("azis"))).unwrap();
        store.insert_word(word("нощ", Some("seed"))).unwrap();
        store
            .insert_lines(vec![
                line("ред", Some("azis"), None),
                line("друг ред", Some("seed"), None),
            ])
            .unwrap();

        let report = store.purge_source("azis").unwrap();
        assert_eq!(report, PurgeReport { words: 1, lines: 1 });
        assert!(store.find_word("пари").unwrap().is_none());
        // the purged word can be mined again
        assert!(store.insert_word(word("пари", Some("seed"))).unwrap());
    }

    #[test]
    fn snapshot_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("nested").join("store.json")).unwrap();

        let store = MemoryStore::new();
        store.insert_word(word("любов", Some("seed"))).unwrap();
        store.insert_lines(vec![line("ред", None, None)]).unwrap();
        store.save(&path).unwrap();

        let reopened = MemoryStore::open(&path).unwrap();
        assert_eq!(reopened.word_count().unwrap(), 1);
        assert!(!reopened.insert_word(word("любов", None)).unwrap());
        assert_eq!(
            reopened.search_lines(&LineFilter::default(), 10).unwrap().len(),
            1
        );
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("absent.json")).unwrap();
        let store = MemoryStore::open(&path).unwrap();
        assert_eq!(store.word_count().unwrap(), 0);
    }

    #[test]
    fn open_malformed_file_errors() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("bad.json")).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            MemoryStore::open(&path),
            Err(StoreError::Snapshot(_))
        ));
    }
}
