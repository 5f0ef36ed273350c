//! Static lookup tables for lyric analysis.
//!
//! Provides the letter-level phonology tables used by the syllable counter
//! and the phonetic extractor, plus the word lists used by section parsing,
//! theme detection, style analysis, and seeding. All tables are built once
//! and never mutated.

pub mod phonology;
pub mod sections;
pub mod seed_words;
pub mod stop_words;
pub mod theme_keywords;
