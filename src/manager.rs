//! Locale state manager.
//!
//! `LocaleProvider` owns the one active manager for a document. UI code never
//! reaches it through a global: it receives a `LocaleHandle` by injection and
//! asks it for a `LocaleContext` on every use. A handle that was never wired
//! to a provider, or whose provider has been dropped, fails with
//! `LocaleError::MissingProviderContext` instead of falling back to defaults.
//! The same holds for a `LocaleContext` kept past the provider's lifetime.
//!
//! Side effects run after the state lock is released, so a document sink or
//! store may read the context while it is being notified.
//!
//! # Example
//!
//! ```rust,ignore
//! let provider = LocaleProvider::new(TranslationTable::builtin(), store, document);
//! let handle = provider.handle();
//!
//! // First render: always the default language.
//! let locale = handle.locale()?;
//! render(locale.translations()?);
//!
//! // Client runtime is ready.
//! provider.hydrate();
//! locale.set_language(Language::ARABIC)?;
//! ```

use crate::document::DocumentRoot;
use crate::effects::{PersistPreference, SyncDirection};
use crate::error::LocaleError;
use crate::i18n::{Direction, Language, LanguageStrings, LocaleMetrics, MetricsReport, TranslationTable};
use crate::state::{HydrationPhase, LocaleEffect, LocaleState};
use crate::storage::{PreferenceStore, PREFERENCE_KEY};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tracing::{debug, info, warn};

/// Translation bundle cached for the language it was resolved for.
#[derive(Clone, Copy)]
struct Memo {
    language: Language,
    bundle: &'static LanguageStrings,
}

struct Inner {
    state: LocaleState,
    memo: Memo,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Owns `LocaleState` and runs its side effects.
pub struct LocaleManager {
    inner: Mutex<Inner>,
    /// Held across a transition and its effects so effects of concurrent
    /// changes never interleave. Readers only take `inner`.
    transitions: Mutex<()>,
    mounted: AtomicBool,
    table: TranslationTable,
    persistence: PersistPreference,
    direction: SyncDirection,
    metrics: LocaleMetrics,
}

/// Consistent read of the manager's state.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSnapshot {
    pub language: Language,
    pub direction: Direction,
    pub phase: HydrationPhase,
    pub translations: &'static LanguageStrings,
}

impl LocaleManager {
    fn new(
        table: TranslationTable,
        store: Arc<dyn PreferenceStore>,
        document: Arc<dyn DocumentRoot>,
    ) -> Self {
        let state = LocaleState::new();
        let memo = Memo {
            language: state.language(),
            bundle: table.get(state.language()),
        };

        Self {
            inner: Mutex::new(Inner { state, memo }),
            transitions: Mutex::new(()),
            mounted: AtomicBool::new(true),
            table,
            persistence: PersistPreference::new(store, PREFERENCE_KEY),
            direction: SyncDirection::new(document),
            metrics: LocaleMetrics::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    /// Refresh the memoized bundle after a transition.
    fn refresh_memo(&self, inner: &mut Inner) {
        let language = inner.state.language();
        if inner.memo.language != language {
            inner.memo = Memo {
                language,
                bundle: self.table.get(language),
            };
        }
    }

    /// Run transition effects in order. Must be called without `inner` held.
    fn run_effects(&self, effects: Vec<LocaleEffect>) {
        for effect in effects {
            match effect {
                LocaleEffect::Persist(language) => {
                    self.persistence.on_explicit_change(language, &self.metrics);
                }
                LocaleEffect::SyncDirection(direction) => {
                    self.direction.on_language_observed(direction, &self.metrics);
                }
            }
        }
    }

    /// Parse a raw persisted value, discarding anything unsupported.
    fn parse_persisted(&self, raw: String) -> Option<Language> {
        match Language::from_code(&raw) {
            Ok(language) => Some(language),
            Err(_) => {
                self.metrics.record_invalid_persisted_value();
                warn!("{}, keeping current language", LocaleError::InvalidPersistedValue(raw));
                None
            }
        }
    }

    fn read_persisted(&self) -> Option<Language> {
        self.persistence
            .read_raw(&self.metrics)
            .and_then(|raw| self.parse_persisted(raw))
    }

    fn hydrate(&self) -> bool {
        let _transition = lock(&self.transitions);
        if !self.lock().state.begin_hydration() {
            return false;
        }

        let restored = self.read_persisted();
        if restored.is_some() {
            self.metrics.record_restored_preference();
        }

        let (effects, language) = {
            let mut inner = self.lock();
            let effects = inner.state.complete_hydration(restored);
            self.refresh_memo(&mut inner);
            (effects, inner.state.language())
        };
        self.metrics.record_hydration();
        self.run_effects(effects);

        info!(
            "Locale hydrated: '{}' ({})",
            language,
            if restored.is_some() { "restored" } else { "default" }
        );
        true
    }

    fn set_language(&self, next: Language) {
        let _transition = lock(&self.transitions);
        let effects = {
            let mut inner = self.lock();
            if inner.state.language() != next {
                self.metrics.record_language_change();
            }
            let effects = inner.state.select(next);
            self.refresh_memo(&mut inner);
            effects
        };

        self.run_effects(effects);
        info!("Locale set to '{}'", next);
    }

    fn sync_from_storage(&self) -> bool {
        let _transition = lock(&self.transitions);
        if !self.lock().state.is_hydrated() {
            return false;
        }

        let Some(next) = self.read_persisted() else {
            return false;
        };

        let effects = {
            let mut inner = self.lock();
            if next == inner.state.language() {
                return false;
            }
            self.metrics.record_language_change();
            let effects = inner.state.observe(next);
            self.refresh_memo(&mut inner);
            effects
        };

        self.run_effects(effects);
        info!("Locale changed externally to '{}'", next);
        true
    }

    fn snapshot(&self) -> LocaleSnapshot {
        let inner = self.lock();
        let language = inner.state.language();
        LocaleSnapshot {
            language,
            direction: language.direction(),
            phase: inner.state.phase(),
            translations: inner.memo.bundle,
        }
    }
}

/// Resolve a weak reference to a manager that is still mounted.
fn mounted(manager: &Weak<LocaleManager>) -> Result<Arc<LocaleManager>, LocaleError> {
    manager
        .upgrade()
        .filter(|manager| manager.is_mounted())
        .ok_or(LocaleError::MissingProviderContext)
}

// ==================== Provider ====================

/// Owner of the active locale manager.
///
/// Dropping the provider unmounts the manager; handles and contexts given out
/// earlier then fail with `MissingProviderContext`.
pub struct LocaleProvider {
    manager: Arc<LocaleManager>,
}

impl LocaleProvider {
    pub fn new(
        table: TranslationTable,
        store: Arc<dyn PreferenceStore>,
        document: Arc<dyn DocumentRoot>,
    ) -> Self {
        Self {
            manager: Arc::new(LocaleManager::new(table, store, document)),
        }
    }

    /// Capability to pass down to consumers.
    pub fn handle(&self) -> LocaleHandle {
        LocaleHandle {
            manager: Arc::downgrade(&self.manager),
        }
    }

    /// Context for code that owns the provider.
    pub fn context(&self) -> LocaleContext {
        LocaleContext {
            manager: Arc::downgrade(&self.manager),
        }
    }

    /// Restore the persisted preference. Runs at most once per provider.
    ///
    /// Returns whether this call performed the hydration.
    pub fn hydrate(&self) -> bool {
        self.manager.hydrate()
    }

    /// Hydrate once `client_ready` resolves.
    ///
    /// If the future never resolves (a non-interactive render), the manager
    /// stays `Uninitialized`.
    pub async fn hydrate_when<F>(&self, client_ready: F) -> bool
    where
        F: Future<Output = ()>,
    {
        client_ready.await;
        self.hydrate()
    }
}

impl Drop for LocaleProvider {
    fn drop(&mut self) {
        self.manager.unmount();
        debug!("Locale provider unmounted");
    }
}

// ==================== Handle ====================

/// Injected capability for reading and changing the locale.
#[derive(Clone, Default)]
pub struct LocaleHandle {
    manager: Weak<LocaleManager>,
}

impl LocaleHandle {
    /// A handle not wired to any provider.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Bind to the active manager.
    ///
    /// # Errors
    /// `MissingProviderContext` if no provider is active for this handle.
    pub fn locale(&self) -> Result<LocaleContext, LocaleError> {
        mounted(&self.manager)?;
        Ok(LocaleContext {
            manager: self.manager.clone(),
        })
    }

    pub fn is_attached(&self) -> bool {
        mounted(&self.manager).is_ok()
    }
}

impl fmt::Debug for LocaleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

// ==================== Context ====================

/// Bound accessor: `{ language, set_language, translations }`.
///
/// Every method fails with `MissingProviderContext` once the provider that
/// issued the context has been dropped.
#[derive(Clone)]
pub struct LocaleContext {
    manager: Weak<LocaleManager>,
}

impl LocaleContext {
    fn manager(&self) -> Result<Arc<LocaleManager>, LocaleError> {
        mounted(&self.manager)
    }

    pub fn language(&self) -> Result<Language, LocaleError> {
        Ok(self.manager()?.lock().state.language())
    }

    /// Bundle for the active language.
    ///
    /// Returns the same reference until the language changes.
    pub fn translations(&self) -> Result<&'static LanguageStrings, LocaleError> {
        Ok(self.manager()?.lock().memo.bundle)
    }

    pub fn direction(&self) -> Result<Direction, LocaleError> {
        Ok(self.language()?.direction())
    }

    pub fn phase(&self) -> Result<HydrationPhase, LocaleError> {
        Ok(self.manager()?.lock().state.phase())
    }

    pub fn is_hydrated(&self) -> Result<bool, LocaleError> {
        Ok(self.phase()? == HydrationPhase::Hydrated)
    }

    pub fn snapshot(&self) -> Result<LocaleSnapshot, LocaleError> {
        Ok(self.manager()?.snapshot())
    }

    /// Languages offered by the switcher.
    pub fn languages(&self) -> Result<Vec<Language>, LocaleError> {
        Ok(self.manager()?.table.languages())
    }

    /// Explicit language change.
    ///
    /// Updates state, writes the preference and syncs the document direction
    /// before returning. Storage failures are logged and dropped.
    ///
    /// # Errors
    /// `MissingProviderContext` if the provider is gone; nothing is written.
    pub fn set_language(&self, next: Language) -> Result<(), LocaleError> {
        self.manager()?.set_language(next);
        Ok(())
    }

    /// Explicit language change from a raw code (e.g. a query parameter).
    ///
    /// # Errors
    /// `InvalidLanguage` if the code is not supported. State, storage and
    /// document are left untouched.
    pub fn set_language_code(&self, code: &str) -> Result<(), LocaleError> {
        let manager = self.manager()?;
        match Language::from_code(code) {
            Ok(next) => {
                manager.set_language(next);
                Ok(())
            }
            Err(e) => {
                warn!("Rejected language change: {}", e);
                Err(e)
            }
        }
    }

    /// Pick up a preference written elsewhere (another window).
    ///
    /// Applies a valid, different value without persisting it again. Returns
    /// whether the language changed.
    pub fn sync_from_storage(&self) -> Result<bool, LocaleError> {
        Ok(self.manager()?.sync_from_storage())
    }

    pub fn metrics(&self) -> Result<MetricsReport, LocaleError> {
        Ok(self.manager()?.metrics.report())
    }
}

impl fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("LocaleContext");
        match self.snapshot() {
            Ok(snapshot) => out
                .field("language", &snapshot.language)
                .field("phase", &snapshot.phase),
            Err(_) => out.field("attached", &false),
        };
        out.finish()
    }
}
