//! Translation table validation.
//!
//! Bundles are shape-identical by type, but their values can still drift:
//! an empty string, or a translator dropping a `{placeholder}` that the UI
//! substitutes at render time. This module reports both against the default
//! language's bundle.

use crate::i18n::{Language, LanguageStrings, TranslationTable};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that render visibly broken text
    pub errors: Vec<String>,

    /// Values that look suspicious but still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundles.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every bundle in a table against the default language's bundle.
    pub fn validate_table(table: &TranslationTable) -> ValidationReport {
        let default = Language::default_language();
        let reference = table.get(default);
        let mut report = ValidationReport::new();

        for language in table.languages() {
            let candidate = table.get(language);
            let bundle_report = Self::validate(reference, candidate);
            report.errors.extend(
                bundle_report
                    .errors
                    .into_iter()
                    .map(|e| format!("[{}] {}", language.code(), e)),
            );
            report.warnings.extend(
                bundle_report
                    .warnings
                    .into_iter()
                    .map(|w| format!("[{}] {}", language.code(), w)),
            );
        }

        report
    }

    /// Validate one bundle against a reference bundle.
    ///
    /// Checks that:
    /// - no value is empty (error)
    /// - each value uses the same placeholder names as the reference (error)
    pub fn validate(reference: &LanguageStrings, candidate: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((key, expected), (_, actual)) in reference.entries().into_iter().zip(candidate.entries()) {
            if actual.trim().is_empty() {
                report.errors.push(format!("'{}' is empty", key));
                continue;
            }

            let expected_placeholders = Self::extract_placeholders(expected);
            let actual_placeholders = Self::extract_placeholders(actual);
            if expected_placeholders != actual_placeholders {
                report.errors.push(format!(
                    "'{}' placeholder mismatch: expected {:?}, found {:?}",
                    key, expected_placeholders, actual_placeholders
                ));
            }

            if actual != actual.trim() {
                report
                    .warnings
                    .push(format!("'{}' has leading or trailing whitespace", key));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a template
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::{ARABIC_STRINGS, ENGLISH_STRINGS, INDONESIAN_STRINGS};

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = TranslationValidator::extract_placeholders("Hello, {name}");
        assert_eq!(found, BTreeSet::from(["name".to_string()]));
    }

    #[test]
    fn test_extract_placeholders_multiple() {
        let found = TranslationValidator::extract_placeholders("{item} costs {price}");
        assert_eq!(found.len(), 2);
        assert!(found.contains("item"));
        assert!(found.contains("price"));
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("Wallet").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(TranslationValidator::extract_placeholders("{} {Name} {1}").is_empty());
    }

    // ==================== Bundle Validation Tests ====================

    #[test]
    fn test_builtin_bundles_are_clean() {
        for candidate in [&ENGLISH_STRINGS, &ARABIC_STRINGS, &INDONESIAN_STRINGS] {
            let report = TranslationValidator::validate(&INDONESIAN_STRINGS, candidate);
            assert!(report.is_clean(), "{:?}", report);
        }
    }

    #[test]
    fn test_missing_placeholder_is_error() {
        let broken = LanguageStrings {
            greeting: "Welcome back",
            ..ENGLISH_STRINGS
        };
        let report = TranslationValidator::validate(&INDONESIAN_STRINGS, &broken);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("greeting"));
    }

    #[test]
    fn test_empty_value_is_error() {
        let broken = LanguageStrings {
            nav_food: "  ",
            ..ENGLISH_STRINGS
        };
        let report = TranslationValidator::validate(&INDONESIAN_STRINGS, &broken);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("nav_food"));
    }

    #[test]
    fn test_whitespace_is_warning() {
        let sloppy = LanguageStrings {
            loading: "Loading... ",
            ..ENGLISH_STRINGS
        };
        let report = TranslationValidator::validate(&INDONESIAN_STRINGS, &sloppy);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    // ==================== Table Validation Tests ====================

    #[test]
    fn test_builtin_table_is_clean() {
        let report = TranslationValidator::validate_table(&TranslationTable::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}
