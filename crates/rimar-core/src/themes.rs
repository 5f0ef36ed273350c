//! Theme detection by keyword hits.
//!
//! A line's theme is the one with the most distinct keywords occurring in it
//! (substring match, case-insensitive). Ties go to the theme listed first in
//! [`THEME_KEYWORDS`].

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::theme_keywords::THEME_KEYWORDS;
use crate::error::CollaboratorError;

/// The closed set of lyric themes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Theme {
    /// Cash, luxury, spending.
    Money,
    /// Romance and desire.
    Love,
    /// Rivals, betrayal, revenge.
    Enemies,
    /// Clubs, drinks, nights out.
    Party,
    /// Neighbourhood, survival, hard life.
    Street,
}

impl Theme {
    /// All themes in tie-break order.
    pub const ALL: [Self; 5] = [
        Self::Money,
        Self::Love,
        Self::Enemies,
        Self::Party,
        Self::Street,
    ];

    /// Lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Love => "love",
            Self::Enemies => "enemies",
            Self::Party => "party",
            Self::Street => "street",
        }
    }

    /// Mood descriptor handed to the text generator alongside the theme.
    pub const fn mood(&self) -> &'static str {
        match self {
            Self::Money => "confident, flashy, dominant",
            Self::Love => "romantic, passionate, vulnerable",
            Self::Enemies => "aggressive, threatening, dominant",
            Self::Party => "energetic, wild, euphoric",
            Self::Street => "raw, gritty, survival",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can tag a line of text with a theme.
pub trait ThemeDetector: Send + Sync {
    /// Detect the dominant theme of `text`, if any.
    fn detect_theme(&self, text: &str) -> Result<Option<Theme>, CollaboratorError>;
}

/// All keywords in one automaton, with each pattern's theme alongside.
struct KeywordMatcher {
    automaton: AhoCorasick,
    themes: Vec<Theme>,
}

static MATCHER: LazyLock<KeywordMatcher> = LazyLock::new(|| {
    let mut patterns = Vec::new();
    let mut themes = Vec::new();
    for (theme, keywords) in THEME_KEYWORDS {
        for keyword in *keywords {
            patterns.push(*keyword);
            themes.push(*theme);
        }
    }
    KeywordMatcher {
        automaton: AhoCorasick::new(&patterns).expect("valid keyword automaton"),
        themes,
    }
});

/// Detect the theme of `text` from the static keyword table.
pub fn detect_theme(text: &str) -> Option<Theme> {
    let lowered = text.to_lowercase();
    let mut seen = vec![false; MATCHER.themes.len()];
    let mut scores = [0usize; Theme::ALL.len()];

    for m in MATCHER.automaton.find_overlapping_iter(&lowered) {
        let id = m.pattern().as_usize();
        if !seen[id] {
            seen[id] = true;
            scores[MATCHER.themes[id].index()] += 1;
        }
    }

    let mut best: Option<(Theme, usize)> = None;
    for theme in Theme::ALL {
        let score = scores[theme.index()];
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((theme, score));
        }
    }
    best.map(|(theme, _)| theme)
}

/// The built-in keyword detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordThemes;

impl ThemeDetector for KeywordThemes {
    fn detect_theme(&self, text: &str) -> Result<Option<Theme>, CollaboratorError> {
        Ok(detect_theme(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_keyword() {
        assert_eq!(detect_theme("Имам пари да хвърлям"), Some(Theme::Money));
    }

    #[test]
    fn no_keywords_means_no_theme() {
        assert_eq!(detect_theme("Тихо е навън"), None);
        assert_eq!(detect_theme(""), None);
    }

    #[test]
    fn highest_hit_count_wins() {
        // one money keyword, two love keywords
        assert_eq!(
            detect_theme("пари, сърце и любов"),
            Some(Theme::Love)
        );
    }

    #[test]
    fn ties_go_to_table_order() {
        // one money keyword, one love keyword
        assert_eq!(detect_theme("пари и любов"), Some(Theme::Money));
    }

    #[test]
    fn repeated_keyword_counts_once() {
        // "нощ" twice is still one party hit; two street hits win
        assert_eq!(
            detect_theme("нощ, нощ, улица, квартал"),
            Some(Theme::Street)
        );
    }

    #[test]
    fn case_insensitive_and_multilingual() {
        assert_eq!(detect_theme("I GOT MONEY in the bank"), Some(Theme::Money));
        assert_eq!(detect_theme("Dragoste, dragoste"), Some(Theme::Love));
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Enemies).unwrap(), "\"enemies\"");
        assert_eq!(Theme::Party.to_string(), "party");
    }

    #[test]
    fn every_theme_has_keywords_and_mood() {
        for theme in Theme::ALL {
            assert!(THEME_KEYWORDS.iter().any(|(t, kws)| *t == theme && !kws.is_empty()));
            assert!(!theme.mood().is_empty());
        }
    }

    #[test]
    fn keyword_detector_never_fails() {
        let detector = KeywordThemes;
        assert_eq!(
            detector.detect_theme("клуб и водка").unwrap(),
            Some(Theme::Party)
        );
    }
}
