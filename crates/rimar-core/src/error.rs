//! Error types for rimar-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the lyric store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("store snapshot I/O failed at {path}: {source}")]
    Io {
        /// The snapshot path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded.
    #[error("store snapshot is malformed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by an injected collaborator (storage, theme detection).
///
/// The core never retries or suppresses these.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// The lyric store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The theme detector failed.
    #[error("theme detector failed: {0}")]
    ThemeDetector(String),
}

/// Errors returned by the rhyme, corpus, and style operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The caller broke an argument contract.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A collaborator failed; passed through unchanged.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Collaborator(CollaboratorError::Store(err))
    }
}

impl CoreError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_surfaces_as_collaborator() {
        let err: CoreError = StoreError::Poisoned.into();
        assert!(matches!(
            err,
            CoreError::Collaborator(CollaboratorError::Store(StoreError::Poisoned))
        ));
        assert_eq!(err.to_string(), "store lock poisoned");
    }

    #[test]
    fn invalid_argument_names_the_argument() {
        let err = CoreError::invalid("limit", "must be at least 1");
        assert_eq!(err.to_string(), "invalid argument `limit`: must be at least 1");
    }
}
