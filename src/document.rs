//! Document root: the sink for the text-direction attribute.
//!
//! The manager only ever writes here. Nothing reads the attribute back to
//! decide anything; it is derived from the active language.

use crate::i18n::{Direction, Language};
use std::sync::Mutex;

/// Root element of the rendered document.
pub trait DocumentRoot: Send + Sync {
    /// Overwrite the root `dir` attribute.
    fn set_direction(&self, direction: Direction);
}

#[derive(Debug)]
struct RootAttributes {
    dir: Direction,
    writes: usize,
}

/// Document root kept in memory.
///
/// A fresh document carries the direction of the default language, which is
/// what a server-side render of the shell emits.
#[derive(Debug)]
pub struct MemoryDocument {
    attributes: Mutex<RootAttributes>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::rendered_for(Language::default_language())
    }

    /// Document as rendered for a given language, before any client writes.
    pub fn rendered_for(language: Language) -> Self {
        Self {
            attributes: Mutex::new(RootAttributes {
                dir: language.direction(),
                writes: 0,
            }),
        }
    }

    /// Current value of the `dir` attribute.
    pub fn direction(&self) -> Direction {
        self.attributes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .dir
    }

    /// Number of client-side writes to the attribute.
    pub fn writes(&self) -> usize {
        self.attributes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .writes
    }

    /// The root element's opening tag.
    pub fn root_tag(&self) -> String {
        format!("<html dir=\"{}\">", self.direction().as_attr())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_direction(&self, direction: Direction) {
        let mut attributes = self
            .attributes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attributes.dir = direction;
        attributes.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_uses_default_direction() {
        let document = MemoryDocument::new();
        assert_eq!(document.direction(), Language::default_language().direction());
        assert_eq!(document.writes(), 0);
    }

    #[test]
    fn test_rendered_for_arabic() {
        let document = MemoryDocument::rendered_for(Language::ARABIC);
        assert_eq!(document.direction(), Direction::Rtl);
    }

    #[test]
    fn test_set_direction_overwrites_and_counts() {
        let document = MemoryDocument::new();
        document.set_direction(Direction::Rtl);
        document.set_direction(Direction::Rtl);
        assert_eq!(document.direction(), Direction::Rtl);
        assert_eq!(document.writes(), 2);
    }

    #[test]
    fn test_root_tag() {
        let document = MemoryDocument::new();
        assert_eq!(document.root_tag(), "<html dir=\"ltr\">");
        document.set_direction(Direction::Rtl);
        assert_eq!(document.root_tag(), "<html dir=\"rtl\">");
    }
}
