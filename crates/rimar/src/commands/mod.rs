//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use rimar_core::config::Config;
use rimar_core::store::MemoryStore;

pub mod import;
pub mod info;
pub mod ingest;
pub mod purge;
pub mod rhymes;
pub mod search;
pub mod seed;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod signature;
pub mod style;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Reject inline text larger than the configured limit.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && text.len() > max
    {
        anyhow::bail!(
            "input too large: {} bytes (limit: {max} bytes)",
            text.len()
        );
    }
    Ok(())
}

/// The lyric store plus the snapshot file it was loaded from.
pub struct StoreHandle {
    /// The loaded store.
    pub store: MemoryStore,
    path: Option<Utf8PathBuf>,
}

impl StoreHandle {
    /// Open the configured snapshot, or an empty store if it does not exist yet.
    ///
    /// Without a resolvable path (no home directory and no `store_path`), the
    /// store lives in memory only and nothing is persisted.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let Some(path) = config.resolved_store_path() else {
            tracing::warn!("no store path available; changes will not be saved");
            return Ok(Self {
                store: MemoryStore::new(),
                path: None,
            });
        };
        let store = MemoryStore::open(&path)
            .with_context(|| format!("failed to open store at {path}"))?;
        Ok(Self {
            store,
            path: Some(path),
        })
    }

    /// Snapshot location, if any.
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Write the store back to its snapshot file.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(ref path) = self.path {
            self.store
                .save(path)
                .with_context(|| format!("failed to save store to {path}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rimar_core::store::LyricStore;
    use tempfile::TempDir;

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        std::fs::write(&path, "пари пари пари").unwrap();

        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn inline_text_limit() {
        assert!(check_input_size("нощ", Some(100)).is_ok());
        assert!(check_input_size("нощ", Some(2)).is_err());
        assert!(check_input_size("нощ", None).is_ok());
    }

    #[test]
    fn store_handle_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("store.json")).unwrap();
        let config = Config {
            store_path: Some(path.clone()),
            ..Config::default()
        };

        let handle = StoreHandle::open(&config).unwrap();
        rimar_core::seed_words(&handle.store).unwrap();
        handle.save().unwrap();
        assert_eq!(handle.path(), Some(path.as_path()));

        let reopened = StoreHandle::open(&config).unwrap();
        assert!(reopened.store.word_count().unwrap() > 0);
    }
}
