//! Language type: validated member of the supported language set.
//!
//! A `Language` can only be obtained from the registry (or one of the
//! constants below), so holding one proves the code is supported.

use crate::error::LocaleError;
use crate::i18n::{Direction, LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;

/// A validated display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Locale code (e.g., "id", "en", "ar")
    code: &'static str,
}

impl Language {
    pub const INDONESIAN: Language = Language { code: "id" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// The right-to-left locale.
    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a locale code.
    ///
    /// Matching is exact. Unknown or disabled codes are rejected with
    /// `LocaleError::InvalidLanguage`.
    ///
    /// # Example
    /// ```ignore
    /// let arabic = Language::from_code("ar")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LocaleError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            _ => Err(LocaleError::InvalidLanguage(code.to_string())),
        }
    }

    /// The build-time default language.
    ///
    /// This is what every render observes before the persisted preference
    /// has been restored.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All selectable languages, in switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen
    /// for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Arabic").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "العربية").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
