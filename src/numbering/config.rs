/// Configuration types for list number rendering.
use serde::{Deserialize, Serialize};

/// Glyph emitted for bullet levels (MIDDLE DOT).
pub const DEFAULT_BULLET: &str = "\u{00B7}";

/// Options controlling how list numbers are rendered.
///
/// # Examples
///
/// ```rust
/// use longan::numbering::NumberingOptions;
///
/// let options = NumberingOptions::new().with_bullet("\u{2022}");
/// assert_eq!(options.bullet, "\u{2022}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingOptions {
    /// Text written for bullet levels, before the trailing space
    pub bullet: String,
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self {
            bullet: DEFAULT_BULLET.to_string(),
        }
    }
}

impl NumberingOptions {
    /// Create a new `NumberingOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bullet glyph.
    #[inline]
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }
}
