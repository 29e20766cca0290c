//! Locale metrics and observability.
//!
//! Counters are owned by each manager instance, so two providers (or two
//! tests) never share numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one locale manager.
#[derive(Debug, Default)]
pub struct LocaleMetrics {
    /// Completed hydrations (at most one per manager)
    hydrations: AtomicUsize,

    /// Hydrations that restored a valid persisted preference
    restored_preferences: AtomicUsize,

    /// Persisted values that were not a supported language code
    invalid_persisted_values: AtomicUsize,

    /// Failed storage reads and writes
    storage_failures: AtomicUsize,

    /// Explicit and observed language changes
    language_changes: AtomicUsize,

    /// Writes to the document direction attribute
    direction_writes: AtomicUsize,
}

impl LocaleMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hydration(&self) {
        self.hydrations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_restored_preference(&self) {
        self.restored_preferences.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_persisted_value(&self) {
        self.invalid_persisted_values.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_failure(&self) {
        self.storage_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_direction_write(&self) {
        self.direction_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hydrations(&self) -> usize {
        self.hydrations.load(Ordering::Relaxed)
    }

    pub fn restored_preferences(&self) -> usize {
        self.restored_preferences.load(Ordering::Relaxed)
    }

    pub fn invalid_persisted_values(&self) -> usize {
        self.invalid_persisted_values.load(Ordering::Relaxed)
    }

    pub fn storage_failures(&self) -> usize {
        self.storage_failures.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn direction_writes(&self) -> usize {
        self.direction_writes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            hydrations: self.hydrations(),
            restored_preferences: self.restored_preferences(),
            invalid_persisted_values: self.invalid_persisted_values(),
            storage_failures: self.storage_failures(),
            language_changes: self.language_changes(),
            direction_writes: self.direction_writes(),
        }
    }
}

/// Point-in-time copy of the locale counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub hydrations: usize,
    pub restored_preferences: usize,
    pub invalid_persisted_values: usize,
    pub storage_failures: usize,
    pub language_changes: usize,
    pub direction_writes: usize,
}
