//! Internationalization (i18n) data for the dashboard.
//!
//! Everything here is static: the set of supported languages, their text
//! direction and their translation bundles. The live, per-session state
//! lives in [`crate::manager`].
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type; holding one proves the code is supported
//! - `direction`: Left-to-right / right-to-left text direction
//! - `strings`: Shape-identical translation bundles, one per language
//! - `table`: Language-keyed translation table handed to the manager
//! - `validator`: Placeholder and emptiness checks across bundles
//! - `metrics`: Per-manager counters
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard_locale::i18n::{Language, TranslationTable};
//!
//! let table = TranslationTable::builtin();
//! let arabic = Language::from_code("ar")?;
//! assert!(arabic.is_rtl());
//! println!("{}", table.get(arabic).nav_wallet);
//! ```

mod direction;
mod language;
mod metrics;
mod registry;
pub mod strings;
mod table;
mod validator;

pub use direction::Direction;
pub use language::Language;
pub use metrics::{LocaleMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use table::TranslationTable;
pub use validator::{TranslationValidator, ValidationReport};
