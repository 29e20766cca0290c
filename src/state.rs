//! Locale state machine.
//!
//! Pure transitions only: every method updates `LocaleState` and returns the
//! side effects the caller must run, in order. Storage and the document are
//! never touched here.
//!
//! ```text
//! Uninitialized --begin_hydration--> Hydrating --complete_hydration--> Hydrated
//!       |                                |                                ^
//!       +-------------- select (explicit choice wins) -------------------+
//! ```

use crate::i18n::{Direction, Language};
use tracing::debug;

/// Progress of the one-time restore from persisted storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationPhase {
    /// First render; language is the build-time default
    Uninitialized,
    /// Client runtime is available and the preference is being read
    Hydrating,
    /// Terminal; never reverts
    Hydrated,
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleEffect {
    /// Write the preference record (explicit changes only)
    Persist(Language),
    /// Write the document direction attribute
    SyncDirection(Direction),
}

/// Live state of one locale manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    language: Language,
    phase: HydrationPhase,
}

impl LocaleState {
    /// Initial state seen by the first render.
    pub fn new() -> Self {
        Self {
            language: Language::default_language(),
            phase: HydrationPhase::Uninitialized,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> HydrationPhase {
        self.phase
    }

    pub fn is_hydrated(&self) -> bool {
        self.phase == HydrationPhase::Hydrated
    }

    /// Enter `Hydrating`. Returns false if hydration already started.
    pub fn begin_hydration(&mut self) -> bool {
        if self.phase != HydrationPhase::Uninitialized {
            return false;
        }
        debug!("Locale hydration started");
        self.phase = HydrationPhase::Hydrating;
        true
    }

    /// Finish hydration with the restored preference, if any.
    ///
    /// Only valid from `Hydrating`; in any other phase this is a no-op and
    /// returns no effects. The direction is synced once, even when the
    /// restored language equals the default.
    pub fn complete_hydration(&mut self, restored: Option<Language>) -> Vec<LocaleEffect> {
        if self.phase != HydrationPhase::Hydrating {
            return Vec::new();
        }

        if let Some(language) = restored {
            self.language = language;
        }
        self.phase = HydrationPhase::Hydrated;
        debug!("Locale hydrated with '{}'", self.language);

        vec![LocaleEffect::SyncDirection(self.language.direction())]
    }

    /// Explicit user choice.
    ///
    /// Effects, in order: persist the choice, then sync direction. A choice
    /// made before hydration completes ends hydration immediately; the
    /// persisted value is superseded by the user's choice.
    pub fn select(&mut self, next: Language) -> Vec<LocaleEffect> {
        self.language = next;
        if self.phase != HydrationPhase::Hydrated {
            debug!("Explicit locale choice '{}' completes hydration", next);
            self.phase = HydrationPhase::Hydrated;
        }

        vec![
            LocaleEffect::Persist(next),
            LocaleEffect::SyncDirection(next.direction()),
        ]
    }

    /// Language change that did not come from the user (e.g. another window
    /// wrote the preference). Never persisted.
    ///
    /// Ignored before hydration so the first-render default is preserved.
    pub fn observe(&mut self, next: Language) -> Vec<LocaleEffect> {
        if !self.is_hydrated() {
            return Vec::new();
        }

        self.language = next;
        vec![LocaleEffect::SyncDirection(next.direction())]
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrated_with(restored: Option<Language>) -> LocaleState {
        let mut state = LocaleState::new();
        state.begin_hydration();
        state.complete_hydration(restored);
        state
    }

    // ==================== Initial State Tests ====================

    #[test]
    fn test_initial_state_is_default_and_uninitialized() {
        let state = LocaleState::new();
        assert_eq!(state.language(), Language::default_language());
        assert_eq!(state.phase(), HydrationPhase::Uninitialized);
        assert!(!state.is_hydrated());
    }

    // ==================== Hydration Tests ====================

    #[test]
    fn test_begin_hydration_only_once() {
        let mut state = LocaleState::new();
        assert!(state.begin_hydration());
        assert_eq!(state.phase(), HydrationPhase::Hydrating);
        assert!(!state.begin_hydration());
    }

    #[test]
    fn test_hydrating_keeps_default_language() {
        let mut state = LocaleState::new();
        state.begin_hydration();
        assert_eq!(state.language(), Language::default_language());
    }

    #[test]
    fn test_complete_hydration_with_restored_language() {
        let mut state = LocaleState::new();
        state.begin_hydration();
        let effects = state.complete_hydration(Some(Language::ARABIC));

        assert_eq!(state.language(), Language::ARABIC);
        assert!(state.is_hydrated());
        assert_eq!(effects, vec![LocaleEffect::SyncDirection(Direction::Rtl)]);
    }

    #[test]
    fn test_complete_hydration_without_preference() {
        let state = hydrated_with(None);
        assert_eq!(state.language(), Language::default_language());
        assert!(state.is_hydrated());
    }

    #[test]
    fn test_complete_hydration_requires_hydrating() {
        let mut state = LocaleState::new();
        let effects = state.complete_hydration(Some(Language::ENGLISH));
        assert!(effects.is_empty());
        assert_eq!(state.phase(), HydrationPhase::Uninitialized);
        assert_eq!(state.language(), Language::default_language());
    }

    #[test]
    fn test_hydration_never_reverts() {
        let mut state = hydrated_with(Some(Language::ENGLISH));
        assert!(!state.begin_hydration());
        assert!(state.complete_hydration(Some(Language::ARABIC)).is_empty());
        assert_eq!(state.language(), Language::ENGLISH);
        assert!(state.is_hydrated());
    }

    // ==================== Explicit Selection Tests ====================

    #[test]
    fn test_select_effect_order() {
        let mut state = hydrated_with(None);
        let effects = state.select(Language::ARABIC);

        assert_eq!(state.language(), Language::ARABIC);
        assert_eq!(
            effects,
            vec![
                LocaleEffect::Persist(Language::ARABIC),
                LocaleEffect::SyncDirection(Direction::Rtl),
            ]
        );
    }

    #[test]
    fn test_select_same_language_repeats_effects() {
        let mut state = hydrated_with(Some(Language::ENGLISH));
        let first = state.select(Language::ENGLISH);
        let snapshot = state;
        let second = state.select(Language::ENGLISH);

        assert_eq!(first, second);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_select_before_hydration_completes_it() {
        let mut state = LocaleState::new();
        state.begin_hydration();
        state.select(Language::ENGLISH);

        assert!(state.is_hydrated());
        assert!(state.complete_hydration(Some(Language::ARABIC)).is_empty());
        assert_eq!(state.language(), Language::ENGLISH);
    }

    // ==================== Observed Change Tests ====================

    #[test]
    fn test_observe_after_hydration_syncs_direction_only() {
        let mut state = hydrated_with(None);
        let effects = state.observe(Language::ARABIC);
        assert_eq!(state.language(), Language::ARABIC);
        assert_eq!(effects, vec![LocaleEffect::SyncDirection(Direction::Rtl)]);
    }

    #[test]
    fn test_observe_before_hydration_is_ignored() {
        let mut state = LocaleState::new();
        assert!(state.observe(Language::ARABIC).is_empty());
        assert_eq!(state.language(), Language::default_language());
    }
}
