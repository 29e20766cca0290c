//! Text direction of a language, as written to the document root.

use std::fmt;

/// Horizontal text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left-to-right (Indonesian, English, ...)
    #[default]
    Ltr,
    /// Right-to-left (Arabic)
    Rtl,
}

impl Direction {
    /// Value of the document `dir` attribute for this direction.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}
