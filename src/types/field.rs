//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path such as `locales.zh.theme.sidebar[2]`.
///
/// Locale keys and sidebar indices are runtime values, so paths are built
/// incrementally while walking the configuration:
///
/// ```
/// use doclocale::FieldPath;
///
/// let path = FieldPath::new("locales").child("zh").child("theme");
/// assert_eq!(path.child("sidebar").index(2).as_str(), "locales.zh.theme.sidebar[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a named segment: `theme` + `sidebar` -> `theme.sidebar`.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    /// Append a sequence index: `sidebar` + `2` -> `sidebar[2]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
