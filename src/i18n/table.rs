//! Translation table: immutable map from language to its bundle.

use crate::error::LocaleError;
use crate::i18n::strings::{ARABIC_STRINGS, ENGLISH_STRINGS, INDONESIAN_STRINGS};
use crate::i18n::{Language, LanguageStrings, TranslationValidator};
use std::collections::HashMap;
use tracing::warn;

/// Read-only translation data supplied at build time.
///
/// Every enabled language has exactly one bundle. Lookups hand out the same
/// `&'static` reference each time, so consumers can compare bundles by
/// pointer to skip re-rendering.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    bundles: HashMap<Language, &'static LanguageStrings>,
}

impl TranslationTable {
    /// The bundles compiled into the dashboard.
    pub fn builtin() -> Self {
        let bundles = HashMap::from([
            (Language::INDONESIAN, &INDONESIAN_STRINGS),
            (Language::ENGLISH, &ENGLISH_STRINGS),
            (Language::ARABIC, &ARABIC_STRINGS),
        ]);
        Self { bundles }
    }

    /// Build a table from `(code, bundle)` pairs.
    ///
    /// # Errors
    /// * `InvalidLanguage` if a code is not a supported language
    /// * `MissingBundle` if an enabled language has no bundle
    pub fn from_bundles<I>(bundles: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = (&'static str, &'static LanguageStrings)>,
    {
        let mut map = HashMap::new();
        for (code, strings) in bundles {
            map.insert(Language::from_code(code)?, strings);
        }

        if let Some(missing) = Language::all().into_iter().find(|lang| !map.contains_key(lang)) {
            return Err(LocaleError::MissingBundle(missing.code().to_string()));
        }

        let table = Self { bundles: map };
        let report = TranslationValidator::validate_table(&table);
        for warning in &report.warnings {
            warn!("Translation table: {}", warning);
        }
        for error in &report.errors {
            warn!("Translation table error: {}", error);
        }

        Ok(table)
    }

    /// Bundle for a language.
    ///
    /// Construction guarantees every enabled language is present; the default
    /// bundle is returned as a fallback for completeness.
    pub fn get(&self, language: Language) -> &'static LanguageStrings {
        self.bundles
            .get(&language)
            .or_else(|| self.bundles.get(&Language::default_language()))
            .copied()
            .unwrap_or(&INDONESIAN_STRINGS)
    }

    /// Languages with a bundle, in switcher order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|lang| self.bundles.contains_key(lang))
            .collect()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}
