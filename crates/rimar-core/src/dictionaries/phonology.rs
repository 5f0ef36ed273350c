//! Orthographic phonology tables for Bulgarian.
//!
//! Two alphabets matter: the target Cyrillic alphabet used for rhyme keys,
//! and a broad Latin vowel set so pasted foreign lyrics still get a
//! syllable estimate.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Bulgarian vowel letters (lowercase). Each one is a syllable nucleus.
pub const BG_VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ъ', 'я', 'ю'];

/// Latin vowels, including the accented forms common in Romanian and French lyrics.
pub const LATIN_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'à', 'â', 'ä', 'é', 'è', 'ê', 'ë', 'ï', 'î', 'ô', 'ù', 'û',
    'ü', 'œ', 'æ',
];

/// Word-final devoicing: voiced obstruent → voiceless counterpart.
pub static DEVOICING: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    [
        ('б', 'п'),
        ('в', 'ф'),
        ('г', 'к'),
        ('д', 'т'),
        ('ж', 'ш'),
        ('з', 'с'),
    ]
    .into_iter()
    .collect()
});

/// Vowel equivalence classes used for rhyme matching.
///
/// `я` and `ю` are glides over `а` and `у`. `ъ` is the mid-central vowel and
/// gets its own class; it must never merge with `а`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VowelClass {
    /// а, я
    A,
    /// ъ
    Y,
    /// у, ю
    U,
    /// е
    E,
    /// и
    I,
    /// о
    O,
}

impl VowelClass {
    /// The class letter used inside rhyme keys.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Y => "Y",
            Self::U => "U",
            Self::E => "E",
            Self::I => "I",
            Self::O => "O",
        }
    }
}

impl std::fmt::Display for VowelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vowel letter → equivalence class.
pub static VOWEL_CLASSES: LazyLock<HashMap<char, VowelClass>> = LazyLock::new(|| {
    [
        ('а', VowelClass::A),
        ('я', VowelClass::A),
        ('ъ', VowelClass::Y),
        ('у', VowelClass::U),
        ('ю', VowelClass::U),
        ('е', VowelClass::E),
        ('и', VowelClass::I),
        ('о', VowelClass::O),
    ]
    .into_iter()
    .collect()
});

/// Whether `ch` is a lowercase Bulgarian vowel.
pub fn is_bg_vowel(ch: char) -> bool {
    BG_VOWELS.contains(&ch)
}

/// Whether `ch` counts as a syllable nucleus in either alphabet.
pub fn is_syllable_vowel(ch: char) -> bool {
    is_bg_vowel(ch) || LATIN_VOWELS.contains(&ch)
}

/// Devoice a single letter; letters outside the table pass through.
pub fn devoice(ch: char) -> char {
    DEVOICING.get(&ch).copied().unwrap_or(ch)
}

/// Equivalence class of a vowel letter, if it is one.
pub fn vowel_class(ch: char) -> Option<VowelClass> {
    VOWEL_CLASSES.get(&ch).copied()
}

/// Whether `ch` belongs to the Cyrillic letters used in Bulgarian words
/// (`а`–`я`, `ё`, either case).
pub const fn is_target_letter(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}
