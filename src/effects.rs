//! Side-effect handlers run by the manager after a state transition.
//!
//! Persistence and direction sync are separate handlers because they fire on
//! different transitions: persistence only on explicit changes, direction on
//! hydration and on every post-hydration change.

use crate::document::DocumentRoot;
use crate::error::LocaleError;
use crate::i18n::{Direction, Language, LocaleMetrics};
use crate::storage::PreferenceStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Writes the preference record on explicit language changes.
///
/// Storage failures are logged and dropped; the in-memory choice still holds
/// for the rest of the session.
pub struct PersistPreference {
    store: Arc<dyn PreferenceStore>,
    key: &'static str,
}

impl PersistPreference {
    pub fn new(store: Arc<dyn PreferenceStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Returns whether the write reached storage.
    pub fn on_explicit_change(&self, language: Language, metrics: &LocaleMetrics) -> bool {
        match self.store.write(self.key, language.code()) {
            Ok(()) => {
                debug!("Persisted locale preference '{}'", language);
                true
            }
            Err(e) => {
                metrics.record_storage_failure();
                warn!(
                    "Dropping locale preference write '{}': {}",
                    language,
                    LocaleError::StorageUnavailable(e)
                );
                false
            }
        }
    }

    /// Read the raw persisted value. Failures read as "no preference".
    pub fn read_raw(&self, metrics: &LocaleMetrics) -> Option<String> {
        match self.store.read(self.key) {
            Ok(value) => value,
            Err(e) => {
                metrics.record_storage_failure();
                warn!("{}, using default", LocaleError::StorageUnavailable(e));
                None
            }
        }
    }
}

/// Writes the document direction attribute.
pub struct SyncDirection {
    document: Arc<dyn DocumentRoot>,
}

impl SyncDirection {
    pub fn new(document: Arc<dyn DocumentRoot>) -> Self {
        Self { document }
    }

    /// Runs once hydration completes and on every later language change.
    pub fn on_language_observed(&self, direction: Direction, metrics: &LocaleMetrics) {
        self.document.set_direction(direction);
        metrics.record_direction_write();
        debug!("Document direction set to '{}'", direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::storage::{MemoryStore, UnavailableStore, PREFERENCE_KEY};

    #[test]
    fn test_persist_writes_raw_code() {
        let store = Arc::new(MemoryStore::new());
        let handler = PersistPreference::new(store.clone(), PREFERENCE_KEY);
        let metrics = LocaleMetrics::new();

        assert!(handler.on_explicit_change(Language::ARABIC, &metrics));
        assert_eq!(store.get(PREFERENCE_KEY), Some("ar".to_string()));
        assert_eq!(metrics.storage_failures(), 0);
    }

    #[test]
    fn test_persist_failure_is_absorbed() {
        let handler = PersistPreference::new(Arc::new(UnavailableStore::new("off")), PREFERENCE_KEY);
        let metrics = LocaleMetrics::new();

        assert!(!handler.on_explicit_change(Language::ENGLISH, &metrics));
        assert_eq!(metrics.storage_failures(), 1);
    }

    #[test]
    fn test_read_raw_returns_stored_value() {
        let store = Arc::new(MemoryStore::new().with_value(PREFERENCE_KEY, "xx"));
        let handler = PersistPreference::new(store, PREFERENCE_KEY);
        assert_eq!(handler.read_raw(&LocaleMetrics::new()), Some("xx".to_string()));
    }

    #[test]
    fn test_read_raw_failure_reads_none() {
        let handler = PersistPreference::new(Arc::new(UnavailableStore::new("off")), PREFERENCE_KEY);
        let metrics = LocaleMetrics::new();
        assert_eq!(handler.read_raw(&metrics), None);
        assert_eq!(metrics.storage_failures(), 1);
    }

    #[test]
    fn test_sync_direction_writes_document() {
        let document = Arc::new(MemoryDocument::new());
        let handler = SyncDirection::new(document.clone());
        let metrics = LocaleMetrics::new();

        handler.on_language_observed(Direction::Rtl, &metrics);
        assert_eq!(document.direction(), Direction::Rtl);
        assert_eq!(metrics.direction_writes(), 1);
    }
}
