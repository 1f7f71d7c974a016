//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A typed wrapper for config field paths.
///
/// Each section declares its paths as associated constants:
///
/// ```ignore
/// impl TreeConfig {
///     pub const SRC: FieldPath = FieldPath::new("tree.src");
/// }
///
/// diag.error(TreeConfig::SRC, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
