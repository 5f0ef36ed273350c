//! Rhyme classification into perfect, near, and slant tiers.
//!
//! Every candidate is compared against the query's [`PhoneticSignature`] and
//! lands in the first tier whose rule it satisfies:
//!
//! 1. **perfect**: identical rhyme group
//! 2. **near**: same vowel class and same consonant frame
//! 3. **slant**: same non-empty consonant frame
//!
//! Within a tier, candidates keep the pool's iteration order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::phonetics::{PhoneticSignature, clean_word, extract_signature};
use crate::store::LyricStore;

/// Rhyme tier of one candidate relative to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RhymeTier {
    /// Identical rhyme group.
    Perfect,
    /// Same vowel class and consonant frame, different bridge.
    Near,
    /// Same trailing consonants only.
    Slant,
}

/// Candidates bucketed by tier, each list capped at the requested limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeBuckets {
    /// Perfect rhymes.
    pub perfect: Vec<String>,
    /// Near rhymes.
    pub near: Vec<String>,
    /// Slant rhymes.
    pub slant: Vec<String>,
}

impl RhymeBuckets {
    /// Total number of suggestions across all tiers.
    pub fn len(&self) -> usize {
        self.perfect.len() + self.near.len() + self.slant.len()
    }

    /// Whether every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, tier: RhymeTier) -> &mut Vec<String> {
        match tier {
            RhymeTier::Perfect => &mut self.perfect,
            RhymeTier::Near => &mut self.near,
            RhymeTier::Slant => &mut self.slant,
        }
    }

    fn is_full(&self, limit: usize) -> bool {
        self.perfect.len() >= limit && self.near.len() >= limit && self.slant.len() >= limit
    }
}

/// Classify `candidate` against `query`. `None` means no rhyme.
pub fn classify(query: &PhoneticSignature, candidate: &PhoneticSignature) -> Option<RhymeTier> {
    if query.is_empty() {
        return None;
    }
    if candidate.rhyme_group == query.rhyme_group {
        Some(RhymeTier::Perfect)
    } else if candidate.vowel_class == query.vowel_class
        && candidate.consonant_frame == query.consonant_frame
    {
        Some(RhymeTier::Near)
    } else if !candidate.consonant_frame.is_empty()
        && candidate.consonant_frame == query.consonant_frame
    {
        Some(RhymeTier::Slant)
    } else {
        None
    }
}

/// Bucket the words of `pool` by how well they rhyme with `word`.
///
/// The query does not need to be in the pool. A candidate equal to the query
/// after cleaning is skipped. A query with no Bulgarian letters returns empty
/// buckets without iterating the pool, as does a zero `limit`.
///
/// # Errors
///
/// Infallible for in-memory pools; the `Result` matches the store-backed
/// variant.
#[tracing::instrument(skip_all, fields(word = %word, limit = limit))]
pub fn find_rhymes<I>(word: &str, pool: I, limit: usize) -> CoreResult<RhymeBuckets>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut buckets = RhymeBuckets::default();
    let query = extract_signature(word);
    if limit == 0 || query.is_empty() {
        return Ok(buckets);
    }
    let query_clean = clean_word(word);

    let mut scanned = 0usize;
    for candidate in pool {
        let candidate = candidate.as_ref();
        scanned += 1;
        if clean_word(candidate) == query_clean {
            continue;
        }
        let Some(tier) = classify(&query, &extract_signature(candidate)) else {
            continue;
        };
        let bucket = buckets.bucket_mut(tier);
        if bucket.len() < limit {
            bucket.push(candidate.to_string());
        }
        if buckets.is_full(limit) {
            break;
        }
    }

    tracing::debug!(
        scanned,
        perfect = buckets.perfect.len(),
        near = buckets.near.len(),
        slant = buckets.slant.len(),
        "rhymes classified"
    );
    Ok(buckets)
}

/// [`find_rhymes`] over the store's whole word pool, fetched once.
///
/// # Errors
///
/// Returns [`CoreError::Collaborator`](crate::error::CoreError::Collaborator)
/// if the store fails.
pub fn find_rhymes_in_store(
    word: &str,
    store: &dyn LyricStore,
    limit: usize,
) -> CoreResult<RhymeBuckets> {
    if limit == 0 || extract_signature(word).is_empty() {
        return Ok(RhymeBuckets::default());
    }
    let pool = store.all_words()?;
    find_rhymes(word, pool.iter().map(|w| w.word.as_str()), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_words;
    use crate::store::MemoryStore;

    const POOL: &[&str] = &[
        "готов", "любов", "нов", "кораб", "пот", "влак", "данък", "пламък", "мая", "стая",
        "баница", "улица", "сметка", "врата",
    ];

    #[test]
    fn devoiced_endings_are_perfect() {
        let buckets = find_rhymes("любов", POOL, 20).unwrap();
        assert_eq!(buckets.perfect, vec!["готов", "нов"]);
    }

    #[test]
    fn query_word_is_never_suggested() {
        let buckets = find_rhymes("  ЛЮБОВ! ", POOL, 20).unwrap();
        let all: Vec<_> = buckets
            .perfect
            .iter()
            .chain(&buckets.near)
            .chain(&buckets.slant)
            .collect();
        assert!(!all.iter().any(|w| *w == "любов"));
    }

    #[test]
    fn empty_query_returns_empty_buckets() {
        assert_eq!(find_rhymes("", POOL, 20).unwrap(), RhymeBuckets::default());
        assert_eq!(find_rhymes("   ", POOL, 20).unwrap(), RhymeBuckets::default());
        assert_eq!(find_rhymes("123", POOL, 20).unwrap(), RhymeBuckets::default());
    }

    #[test]
    fn empty_pool_returns_empty_buckets() {
        let pool: [&str; 0] = [];
        assert!(find_rhymes("любов", pool, 20).unwrap().is_empty());
    }

    #[test]
    fn zero_limit_returns_empty_tiers() {
        assert_eq!(find_rhymes("любов", POOL, 0).unwrap(), RhymeBuckets::default());
    }

    #[test]
    fn mid_central_vowel_does_not_rhyme_with_a() {
        let buckets = find_rhymes("данък", POOL, 20).unwrap();
        assert_eq!(buckets.perfect, vec!["пламък"]);
        // same trailing к, different vowel
        assert_eq!(buckets.slant, vec!["влак"]);
    }

    #[test]
    fn vowel_final_bridges_separate_tiers() {
        let buckets = find_rhymes("баница", POOL, 20).unwrap();
        assert_eq!(buckets.perfect, vec!["улица"]);
        // same vowel class and empty frame, different bridge
        assert_eq!(buckets.near, vec!["мая", "стая", "сметка", "врата"]);
        assert!(buckets.slant.is_empty());
    }

    #[test]
    fn vowel_final_words_with_other_bridges_are_near() {
        let q = extract_signature("мая");
        let c = extract_signature("врата");
        assert_eq!(classify(&q, &c), Some(RhymeTier::Near));
    }

    #[test]
    fn each_candidate_lands_in_one_tier() {
        // кораб → A:п, nothing else ends in п
        assert!(find_rhymes("кораб", POOL, 20).unwrap().is_empty());

        let buckets = find_rhymes("влак", POOL, 20).unwrap();
        assert!(buckets.perfect.is_empty());
        assert_eq!(buckets.slant, vec!["данък", "пламък"]);
        assert!(!buckets.near.iter().any(|w| buckets.slant.contains(w)));
    }

    #[test]
    fn limit_caps_each_tier() {
        let buckets = find_rhymes("баница", POOL, 2).unwrap();
        assert_eq!(buckets.perfect.len(), 1);
        assert_eq!(buckets.near, vec!["мая", "стая"]);
    }

    #[test]
    fn works_with_owned_strings() {
        let pool: Vec<String> = vec!["готов".into(), "любов".into()];
        let buckets = find_rhymes("нов", &pool, 5).unwrap();
        assert_eq!(buckets.perfect, vec!["готов", "любов"]);
    }

    #[test]
    fn store_backed_lookup_uses_the_word_pool() {
        let store = MemoryStore::new();
        seed_words(&store).unwrap();
        let buckets = find_rhymes_in_store("пари", &store, 20).unwrap();
        assert!(buckets.perfect.iter().any(|w| w == "вари" || w == "цари"));
        assert!(!buckets.perfect.contains(&"пари".to_string()));
    }

    #[test]
    fn store_backed_lookup_with_zero_limit_is_empty() {
        let store = MemoryStore::new();
        seed_words(&store).unwrap();
        assert!(find_rhymes_in_store("пари", &store, 0).unwrap().is_empty());
    }
}
