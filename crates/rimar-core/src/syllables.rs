//! Syllable counting by vowel nuclei.
//!
//! Advisory, not phonemic: every Bulgarian or Latin vowel letter is one
//! syllable, and any non-empty token counts at least one (`DJ`, `MC`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::phonology::is_syllable_vowel;

/// Syllable count for one whitespace-delimited word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordSyllables {
    /// The word as written.
    pub word: String,
    /// Its syllable count.
    pub count: usize,
}

/// Total and per-word syllable counts for a line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyllableBreakdown {
    /// Sum of all word counts.
    pub total: usize,
    /// Per-word counts in line order.
    pub per_word: Vec<WordSyllables>,
}

/// Count syllables in a single word.
///
/// Hyphenated compounds are counted part by part and summed. Returns 0 for
/// input with nothing alphanumeric in it.
pub fn count_word_syllables(word: &str) -> usize {
    word.split('-')
        .flat_map(str::split_whitespace)
        .map(count_part)
        .sum()
}

fn count_part(part: &str) -> usize {
    let cleaned: String = part
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.is_empty() {
        return 0;
    }
    let vowels = cleaned.chars().filter(|c| is_syllable_vowel(*c)).count();
    vowels.max(1)
}

/// Count syllables in a line of text. Blank input is 0.
pub fn count_line(text: &str) -> usize {
    text.split_whitespace().map(count_word_syllables).sum()
}

/// Total plus per-word counts for a line.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn breakdown(text: &str) -> SyllableBreakdown {
    let per_word: Vec<WordSyllables> = text
        .split_whitespace()
        .map(|w| WordSyllables {
            word: w.to_string(),
            count: count_word_syllables(w),
        })
        .collect();
    let total = per_word.iter().map(|w| w.count).sum();
    SyllableBreakdown { total, per_word }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_words() {
        assert_eq!(count_line("любов"), 2);
        assert_eq!(count_line("нация"), 3);
    }

    #[test]
    fn full_line() {
        assert_eq!(count_line("Имам пари да хвърлям"), 7);
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(count_word_syllables(""), 0);
        assert_eq!(count_line(""), 0);
        assert_eq!(count_line("   "), 0);
        assert_eq!(count_word_syllables("!?"), 0);
    }

    #[test]
    fn vowelless_token_floors_at_one() {
        assert_eq!(count_word_syllables("DJ"), 1);
        assert_eq!(count_word_syllables("MC,"), 1);
    }

    #[test]
    fn hyphenated_compound() {
        assert_eq!(count_line("черно-бяло"), 4);
        assert_eq!(count_word_syllables("черно-бяло"), 4);
    }

    #[test]
    fn latin_vowels() {
        assert_eq!(count_line("love"), 2);
        assert!(count_line("money") >= 2);
        assert_eq!(count_word_syllables("fête"), 2);
    }

    #[test]
    fn breakdown_per_word() {
        let result = breakdown("Имам пари");
        assert_eq!(result.total, 4);
        assert_eq!(result.per_word.len(), 2);
        assert_eq!(result.per_word[0].word, "Имам");
        assert_eq!(result.per_word[0].count, 2);
        assert_eq!(result.per_word[1].word, "пари");
        assert_eq!(result.per_word[1].count, 2);
    }

    #[test]
    fn breakdown_of_blank_is_empty() {
        assert_eq!(breakdown("  \t"), SyllableBreakdown::default());
    }
}
