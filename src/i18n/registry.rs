//! Language registry: Single source of truth for all supported languages.
//!
//! The dashboard ships a fixed, closed set of display languages. This registry
//! is initialized once with `OnceLock` and never changes at runtime, so a
//! language code accepted here is accepted for the lifetime of the process.

use crate::i18n::Direction;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Locale code as stored in the preference record (e.g., "id", "en", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "Indonesian", "Arabic")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "Bahasa Indonesia")
    pub native_name: &'static str,

    /// Whether this is the build-time default (exactly one should be true)
    pub is_default: bool,

    /// Text direction written to the document root
    pub direction: Direction,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    ///
    /// No case folding or region stripping is applied: "EN" and "en-US" are
    /// both unknown.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language.
    /// The table below is static, so this is a build error, not a runtime one.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Languages offered by the dashboard. Indonesian is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            is_default: true,
            direction: Direction::Ltr,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            direction: Direction::Ltr,
            enabled: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_default: false,
            direction: Direction::Rtl,
            enabled: true,
        },
    ]
}
