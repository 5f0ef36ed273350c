//! Phonetic ending extraction: the rhyme key of a single word.
//!
//! A word is reduced to the part from its last vowel onward. Trailing
//! consonants are devoiced (`любов` → `-оф`), the vowel is mapped to its
//! equivalence class, and the result is keyed in one of two regimes:
//!
//! - consonant-final: `"{class}:{devoiced trailing}"`, e.g. `любов` → `O:ф`
//! - vowel-final: `"{bridge}{class}:"`, where the bridge is the letter before
//!   the last vowel (its class if it is a vowel, its devoiced form otherwise),
//!   e.g. `баница` → `цA:`, `мая` → `AA:`
//!
//! Words with no Bulgarian vowel fall into a third bucket keyed by the letters
//! themselves (`":{letters}"`) so they stay distinct without matching anything
//! by accident.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::phonology::{
    VowelClass, devoice, is_bg_vowel, is_target_letter, vowel_class,
};

/// Derived phonetic description of a word. Pure function output; never stored.
///
/// All fields are empty for input with no Bulgarian letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PhoneticSignature {
    /// Substring from the last vowel to the end (display only).
    pub ending: String,
    /// Equality key for perfect rhymes.
    pub rhyme_group: String,
    /// Class letter of the last vowel (`A`, `Y`, `U`, `E`, `I`, `O`).
    pub vowel_class: String,
    /// Devoiced trailing consonants.
    pub consonant_frame: String,
}

impl PhoneticSignature {
    /// Whether the signature carries no rhyme information.
    pub fn is_empty(&self) -> bool {
        self.rhyme_group.is_empty()
    }
}

/// What sits immediately before a word-final vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bridge {
    /// Adjacent vowel, reduced to its class (`мая`).
    Vowel(VowelClass),
    /// Consonant, devoiced (`баница`).
    Consonant(char),
}

impl fmt::Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vowel(class) => f.write_str(class.as_str()),
            Self::Consonant(ch) => write!(f, "{ch}"),
        }
    }
}

/// Structured rhyme key. [`fmt::Display`] produces the comparable string.
///
/// The consonant-final form always has text after the colon and the
/// vowel-final form never does, so the two cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RhymeKey {
    /// Word ends in one or more consonants after its last vowel.
    ConsonantFinal {
        /// Class of the last vowel.
        vowel_class: VowelClass,
        /// Devoiced trailing consonants (never empty).
        trailing: String,
    },
    /// Word ends in its last vowel.
    VowelFinal {
        /// The letter before the vowel, if any.
        bridge: Option<Bridge>,
        /// Class of the final vowel.
        vowel_class: VowelClass,
    },
    /// Word has no Bulgarian vowel at all.
    NoVowel {
        /// The cleaned letters.
        letters: String,
    },
}

impl fmt::Display for RhymeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConsonantFinal {
                vowel_class,
                trailing,
            } => write!(f, "{vowel_class}:{trailing}"),
            Self::VowelFinal {
                bridge: Some(bridge),
                vowel_class,
            } => write!(f, "{bridge}{vowel_class}:"),
            Self::VowelFinal {
                bridge: None,
                vowel_class,
            } => write!(f, "{vowel_class}:"),
            Self::NoVowel { letters } => write!(f, ":{letters}"),
        }
    }
}

/// Lowercase and drop everything that is not a Bulgarian letter.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| is_target_letter(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Pieces of a cleaned word around its last vowel.
struct Split<'a> {
    letters: &'a [char],
    last_vowel: usize,
}

fn split_at_last_vowel(letters: &[char]) -> Option<Split<'_>> {
    let last_vowel = letters.iter().rposition(|c| is_bg_vowel(*c))?;
    Some(Split {
        letters,
        last_vowel,
    })
}

fn key_for(split: &Split<'_>, class: VowelClass) -> RhymeKey {
    let trailing: String = split.letters[split.last_vowel + 1..]
        .iter()
        .map(|c| devoice(*c))
        .collect();
    if !trailing.is_empty() {
        return RhymeKey::ConsonantFinal {
            vowel_class: class,
            trailing,
        };
    }

    let bridge = split
        .last_vowel
        .checked_sub(1)
        .map(|i| split.letters[i])
        .map(|prev| match vowel_class(prev) {
            Some(prev_class) => Bridge::Vowel(prev_class),
            None => Bridge::Consonant(devoice(prev)),
        });
    RhymeKey::VowelFinal {
        bridge,
        vowel_class: class,
    }
}

/// Structured rhyme key of a word, or `None` when it has no Bulgarian letters.
pub fn rhyme_key(word: &str) -> Option<RhymeKey> {
    let letters: Vec<char> = clean_word(word).chars().collect();
    if letters.is_empty() {
        return None;
    }
    let Some(split) = split_at_last_vowel(&letters) else {
        return Some(RhymeKey::NoVowel {
            letters: letters.into_iter().collect(),
        });
    };
    let class = vowel_class(split.letters[split.last_vowel])?;
    Some(key_for(&split, class))
}

/// Compute the full phonetic signature of a word.
///
/// Deterministic and total: any string is accepted.
pub fn extract_signature(word: &str) -> PhoneticSignature {
    let letters: Vec<char> = clean_word(word).chars().collect();
    if letters.is_empty() {
        return PhoneticSignature::default();
    }

    let Some(split) = split_at_last_vowel(&letters) else {
        let raw: String = letters.iter().collect();
        return PhoneticSignature {
            ending: raw.clone(),
            rhyme_group: RhymeKey::NoVowel {
                letters: raw.clone(),
            }
            .to_string(),
            vowel_class: String::new(),
            consonant_frame: raw,
        };
    };

    // Every letter `is_bg_vowel` accepts has a class.
    let Some(class) = vowel_class(letters[split.last_vowel]) else {
        return PhoneticSignature::default();
    };
    let key = key_for(&split, class);
    let consonant_frame = match &key {
        RhymeKey::ConsonantFinal { trailing, .. } => trailing.clone(),
        _ => String::new(),
    };

    PhoneticSignature {
        ending: letters[split.last_vowel..].iter().collect(),
        rhyme_group: key.to_string(),
        vowel_class: class.as_str().to_string(),
        consonant_frame,
    }
}

/// Shorthand for the `rhyme_group` field of [`extract_signature`].
pub fn rhyme_group(word: &str) -> String {
    rhyme_key(word).map(|k| k.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devoicing_lyubov_gotov() {
        let a = extract_signature("любов");
        let b = extract_signature("готов");
        assert_eq!(a.rhyme_group, b.rhyme_group);
        assert_eq!(a.rhyme_group, "O:ф");
        assert_eq!(a.consonant_frame, "ф");
    }

    #[test]
    fn devoicing_vrag() {
        let sig = extract_signature("враг");
        assert_eq!(sig.consonant_frame, "к");
        assert_eq!(rhyme_group("враг"), rhyme_group("мрак"));
    }

    #[test]
    fn glide_maya_staya() {
        let a = extract_signature("мая");
        let b = extract_signature("стая");
        assert_eq!(a.vowel_class, "A");
        assert_eq!(b.vowel_class, "A");
        assert_eq!(a.rhyme_group, b.rhyme_group);
        assert_eq!(a.rhyme_group, "AA:");
    }

    #[test]
    fn er_golyam_stays_separate() {
        assert_ne!(rhyme_group("влак"), rhyme_group("данък"));
        assert_eq!(rhyme_group("данък"), rhyme_group("пламък"));
        assert_eq!(rhyme_group("данък"), "Y:к");
    }

    #[test]
    fn vowel_final_bridges_are_distinct() {
        let ka = rhyme_group("банка");
        let tsa = rhyme_group("баница");
        let ta = rhyme_group("врата");
        assert_ne!(ka, tsa);
        assert_ne!(ka, ta);
        assert_ne!(tsa, ta);
    }

    #[test]
    fn banitsa_rhymes_with_ulitsa_not_smetka() {
        assert_eq!(rhyme_group("баница"), rhyme_group("улица"));
        assert!(rhyme_group("баница").contains('ц'));
        assert_ne!(rhyme_group("баница"), rhyme_group("сметка"));
    }

    #[test]
    fn consonant_endings() {
        assert_eq!(rhyme_group("нощ"), rhyme_group("мощ"));
        assert_eq!(rhyme_group("нощ"), "O:щ");
    }

    #[test]
    fn vowel_class_of_last_vowel() {
        assert_eq!(extract_signature("мъка").vowel_class, "A");
        assert_eq!(extract_signature("юг").vowel_class, "U");
        assert_eq!(extract_signature("мед").vowel_class, "E");
    }

    #[test]
    fn empty_and_non_alphabetic_inputs() {
        assert_eq!(extract_signature(""), PhoneticSignature::default());
        assert_eq!(extract_signature("123 !?"), PhoneticSignature::default());
        assert_eq!(extract_signature("love"), PhoneticSignature::default());
        assert!(rhyme_key("...").is_none());
        assert_eq!(rhyme_group(""), "");
    }

    #[test]
    fn lone_vowel_has_no_bridge() {
        let sig = extract_signature("а");
        assert_eq!(sig.rhyme_group, "A:");
        assert_eq!(sig.ending, "а");
        assert!(sig.consonant_frame.is_empty());
        assert_eq!(
            rhyme_key("а"),
            Some(RhymeKey::VowelFinal {
                bridge: None,
                vowel_class: VowelClass::A
            })
        );
    }

    #[test]
    fn vowelless_word_keys_on_its_letters() {
        let sig = extract_signature("брр");
        assert_eq!(sig.rhyme_group, ":брр");
        assert_eq!(sig.ending, "брр");
        assert_eq!(sig.consonant_frame, "брр");
        assert!(sig.vowel_class.is_empty());
        assert_ne!(rhyme_group("брр"), rhyme_group("пст"));
    }

    #[test]
    fn noise_is_stripped_before_analysis() {
        assert_eq!(extract_signature("Любов!"), extract_signature("любов"));
        assert_eq!(extract_signature("  ГОТОВ, "), extract_signature("готов"));
    }

    #[test]
    fn ending_keeps_original_letters() {
        let sig = extract_signature("любов");
        assert_eq!(sig.ending, "ов");
    }

    #[test]
    fn regimes_never_share_a_key() {
        let consonant_final = RhymeKey::ConsonantFinal {
            vowel_class: VowelClass::A,
            trailing: "к".into(),
        };
        let vowel_final = RhymeKey::VowelFinal {
            bridge: Some(Bridge::Consonant('к')),
            vowel_class: VowelClass::A,
        };
        assert_ne!(consonant_final.to_string(), vowel_final.to_string());
        assert!(vowel_final.to_string().ends_with(':'));
    }

    #[test]
    fn signature_is_deterministic() {
        for word in ["любов", "баница", "мая", "данък", "DJ", ""] {
            assert_eq!(extract_signature(word), extract_signature(word));
        }
    }

    #[test]
    fn rhyme_key_agrees_with_signature() {
        for word in ["любов", "баница", "мая", "данък", "а", "брр", "юг"] {
            assert_eq!(rhyme_group(word), extract_signature(word).rhyme_group);
        }
    }
}
