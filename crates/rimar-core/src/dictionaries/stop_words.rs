//! Function words left out of vocabulary fingerprints.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Short Bulgarian conjunctions, prepositions, and clitics.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "и", "в", "на", "за", "от", "с", "да", "не", "е", "а", "но", "ме", "те", "се",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` (already lowercased) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_particles_are_stop_words() {
        assert!(is_stop_word("да"));
        assert!(is_stop_word("се"));
        assert!(!is_stop_word("пари"));
    }
}
