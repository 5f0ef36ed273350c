//! Idempotent seeding of the rhyme pool from the built-in vocabulary.

use serde::Serialize;

use crate::dictionaries::seed_words::SEED_WORDS;
use crate::error::CoreResult;
use crate::store::{LyricStore, RhymeableWord};

/// Provenance tag of seeded words.
pub const SEED_SOURCE: &str = "seed";

/// Outcome of [`seed_words`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Words newly inserted.
    pub added: usize,
    /// Words already present.
    pub skipped: usize,
}

/// Insert every built-in seed word not yet in `store`.
///
/// # Errors
///
/// Returns [`CoreError::Collaborator`](crate::error::CoreError::Collaborator)
/// if the store fails.
#[tracing::instrument(skip_all)]
pub fn seed_words(store: &dyn LyricStore) -> CoreResult<SeedReport> {
    let mut report = SeedReport::default();
    for (word, theme) in SEED_WORDS {
        let entry = RhymeableWord::analyze(word, Some(*theme), Some(SEED_SOURCE));
        if store.insert_word(entry)? {
            report.added += 1;
        } else {
            report.skipped += 1;
        }
    }
    tracing::info!(added = report.added, skipped = report.skipped, "seed complete");
    Ok(report)
}
