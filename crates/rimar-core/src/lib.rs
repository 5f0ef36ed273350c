//! Core library for rimar, a Bulgarian songwriting assistant.
//!
//! This crate holds the rhyme engine and everything built around it, for use
//! by the `rimar` CLI, its MCP server, and any downstream consumers.
//!
//! # Modules
//!
//! - [`syllables`] - Vowel-count syllable heuristics
//! - [`phonetics`] - Phonetic rhyme keys with devoicing and vowel classes
//! - [`rhymes`] - Perfect, near, and slant rhyme classification
//! - [`corpus`] - Lyric ingestion, word mining, and corpus search
//! - [`style`] - Style fingerprints and generation context
//! - [`import`] - My-lyrics and reference imports
//! - [`seed`] - Built-in starter vocabulary
//! - [`store`] - Persistence boundary and the in-memory store
//! - [`sections`] - Song section headers
//! - [`themes`] - Keyword theme detection
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use rimar_core::{find_rhymes, phonetics::extract_signature};
//!
//! let signature = extract_signature("любов");
//! assert_eq!(signature.rhyme_group, "O:ф");
//!
//! let buckets = find_rhymes("любов", ["готов", "нощ", "любов"], 20).unwrap();
//! assert_eq!(buckets.perfect, vec!["готов"]);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod dictionaries;
pub mod error;
pub mod import;
pub mod phonetics;
pub mod rhymes;
pub mod sections;
pub mod seed;
pub mod store;
pub mod style;
pub mod syllables;
pub mod text;
pub mod themes;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use corpus::{IngestOptions, IngestReport, context_lines, ingest, search_lines};
pub use error::{
    CollaboratorError, ConfigError, ConfigResult, CoreError, CoreResult, StoreError, StoreResult,
};
pub use import::{ImportMode, ImportOutcome, import_text};
pub use phonetics::{PhoneticSignature, extract_signature};
pub use rhymes::{RhymeBuckets, find_rhymes, find_rhymes_in_store};
pub use seed::{SeedReport, seed_words};
pub use store::{CorpusLine, LineFilter, LyricStore, MemoryStore, RhymeableWord, StylePattern};
pub use style::{StyleAnalysis, analyze, store_style_patterns, style_context};
pub use themes::{KeywordThemes, Theme, ThemeDetector};

/// Default maximum input size: 5 MiB.
///
/// Both the CLI and MCP server reject inputs larger than this unless
/// overridden via `max_input_bytes` or disabled via `disable_input_limit`.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
