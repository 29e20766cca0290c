//! Error types for the locale subsystem.
//!
//! Only `MissingProviderContext` is meant to halt a caller. Everything related
//! to storage or persisted data is absorbed by the manager and degrades to the
//! default language.

use thiserror::Error;

/// Errors raised by the locale manager and its collaborators.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A consumer read or mutated locale state without an active manager.
    #[error("locale accessed outside of an active LocaleProvider")]
    MissingProviderContext,

    /// A caller asked for a language code that is not in the supported set.
    #[error("unsupported language code: '{0}'")]
    InvalidLanguage(String),

    /// The persisted preference is not a supported language code.
    #[error("persisted language preference '{0}' is not supported")]
    InvalidPersistedValue(String),

    /// The preference store could not be read or written.
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// An enabled language has no translation bundle.
    #[error("no translation bundle for enabled language '{0}'")]
    MissingBundle(String),
}

/// Failures of the durable client-side preference storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or not reachable in this environment.
    #[error("storage is not available: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the storage quota.
    #[error("storage quota exceeded ({used} of {quota} bytes)")]
    QuotaExceeded { used: usize, quota: usize },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON key/value object.
    #[error("storage contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
