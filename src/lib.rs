//! Locale and language preference state for the payments dashboard.
//!
//! The active display language is restored from durable storage only after
//! the client runtime is ready, so the first render always matches the
//! server-rendered default. Changes are written through to storage and to the
//! document's `dir` attribute.

pub mod config;
pub mod document;
pub mod effects;
pub mod error;
pub mod i18n;
pub mod manager;
pub mod state;
pub mod storage;

pub use document::{DocumentRoot, MemoryDocument};
pub use error::{LocaleError, StorageError};
pub use i18n::{Direction, Language, LanguageStrings, TranslationTable};
pub use manager::{LocaleContext, LocaleHandle, LocaleProvider, LocaleSnapshot};
pub use state::{HydrationPhase, LocaleEffect, LocaleState};
pub use storage::{FileStore, MemoryStore, PreferenceStore, UnavailableStore, PREFERENCE_KEY};
