//! Text processing utilities for lyrics.
//!
//! Provides line splitting, word extraction, and script detection for use
//! by the corpus and style modules.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Regex for alphanumeric word runs (Unicode-aware).
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Regex for Bulgarian letter runs in lowercased text.
static TARGET_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яё]+").expect("valid regex"));

/// Script of a lyric line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Mostly Cyrillic; treated as the target language.
    Bg,
    /// Mostly Latin script.
    Other,
    /// No letters of either script, or an exact tie.
    #[default]
    Unknown,
}

impl Language {
    /// Lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn is_cyrillic(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{04FF}')
}

const fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '\u{00C0}'..='\u{024F}')
}

/// Majority vote of Cyrillic against Latin letters.
pub fn detect_language(line: &str) -> Language {
    let (cyrillic, latin) = line.chars().fold((0usize, 0usize), |(c, l), ch| {
        (c + usize::from(is_cyrillic(ch)), l + usize::from(is_latin(ch)))
    });
    match cyrillic.cmp(&latin) {
        std::cmp::Ordering::Greater => Language::Bg,
        std::cmp::Ordering::Less => Language::Other,
        std::cmp::Ordering::Equal => Language::Unknown,
    }
}

/// Split text into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Lowercased alphanumeric runs, in order.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Distinct lowercased Bulgarian words of at least `min_len` letters, in
/// first-seen order.
pub fn unique_target_words(text: &str, min_len: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    TARGET_WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() >= min_len)
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

/// Last whitespace-delimited token of a line.
pub fn last_word(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_line_is_bg() {
        assert_eq!(detect_language("Имам пари да хвърлям"), Language::Bg);
    }

    #[test]
    fn latin_line_is_other() {
        assert_eq!(detect_language("I got money in the bank"), Language::Other);
        assert_eq!(detect_language("Am bani de aruncat"), Language::Other);
        assert_eq!(detect_language("J'ai de l'argent"), Language::Other);
    }

    #[test]
    fn ties_and_empty_are_unknown() {
        assert_eq!(detect_language("123 !!"), Language::Unknown);
        assert_eq!(detect_language(""), Language::Unknown);
        assert_eq!(detect_language("ab аб"), Language::Unknown);
    }

    #[test]
    fn mixed_line_follows_majority() {
        assert_eq!(detect_language("DJ пуска музика"), Language::Bg);
    }

    #[test]
    fn split_lines_drops_blanks() {
        assert_eq!(split_lines("  едно \n\n   \nдве"), vec!["едно", "две"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Пари, пари! И DJ-a.");
        assert_eq!(words, vec!["пари", "пари", "и", "dj", "a"]);
    }

    #[test]
    fn unique_target_words_dedups_and_filters() {
        let words = unique_target_words("Пари и ПАРИ, нощ! money да", 3);
        assert_eq!(words, vec!["пари", "нощ"]);
    }

    #[test]
    fn last_word_of_line() {
        assert_eq!(last_word("Шампанско в клуба тази нощ"), Some("нощ"));
        assert_eq!(last_word("   "), None);
    }
}
