//! Level definitions of a numbering list.

use super::format::NumberFormat;
use serde::{Deserialize, Serialize};

/// When a level's counter goes back to its start value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RestartPolicy {
    /// Never restart. Deeper levels are not restarted either.
    Never,
    /// Restart whenever any shallower level is incremented.
    #[default]
    Always,
    /// Restart when a level with index `< R` is incremented, i.e. when one
    /// of the first `R` levels advances.
    AfterLevel(u32),
}

impl RestartPolicy {
    /// Decode the integer form used by list tables: `0` never restarts,
    /// any negative value always restarts, a positive `R` restarts after
    /// the first `R` levels.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => RestartPolicy::Never,
            r if r < 0 => RestartPolicy::Always,
            r => RestartPolicy::AfterLevel(r as u32),
        }
    }

    /// Check whether incrementing `level` resets a deeper level governed by
    /// this policy. `None` means the reset cascade stops here.
    #[inline]
    pub(crate) fn resets_on(self, level: usize) -> Option<bool> {
        match self {
            RestartPolicy::Never => None,
            RestartPolicy::Always => Some(true),
            RestartPolicy::AfterLevel(r) => Some((level as u64) < r as u64),
        }
    }
}

/// Formatting rules for one level of a list.
///
/// # Examples
///
/// ```rust
/// use longan::numbering::{ListLevel, NumberFormat, RestartPolicy};
///
/// let level = ListLevel::new("%1.%2)")
///     .with_start(1)
///     .with_format(NumberFormat::LowerLetter)
///     .with_restart(RestartPolicy::Always);
/// assert_eq!(level.start_value(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLevel {
    /// First value of the counter; `None` inherits the default of 1
    pub start: Option<u32>,
    /// Restart policy relative to shallower levels
    pub restart: RestartPolicy,
    /// Literal text with `%1`..`%9` placeholders
    pub template: Option<String>,
    /// Numeral style; `None` inherits
    pub number_format: Option<NumberFormat>,
    /// Render every placeholder in decimal ("legal" numbering)
    pub is_legal: bool,
}

impl ListLevel {
    /// Create a level with the given template text.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// A bullet level.
    pub fn bullet() -> Self {
        Self {
            number_format: Some(NumberFormat::Bullet),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    #[inline]
    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    #[inline]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    #[inline]
    pub fn with_legal(mut self, is_legal: bool) -> Self {
        self.is_legal = is_legal;
        self
    }

    /// Start value with the inherited default applied.
    #[inline]
    pub fn start_value(&self) -> u32 {
        self.start.unwrap_or(1)
    }
}

/// Base levels of a list together with optional per-paragraph overrides.
///
/// Lookups prefer the override at the same index and fall back to the
/// base level, then to neutral defaults when the index is out of range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LevelView<'a> {
    pub(crate) levels: &'a [ListLevel],
    pub(crate) overrides: Option<&'a [ListLevel]>,
}

impl<'a> LevelView<'a> {
    #[inline]
    fn base(&self, index: usize) -> Option<&'a ListLevel> {
        self.levels.get(index)
    }

    #[inline]
    fn overridden(&self, index: usize) -> Option<&'a ListLevel> {
        self.overrides.and_then(|o| o.get(index))
    }

    pub(crate) fn start(&self, index: usize) -> u32 {
        self.overridden(index)
            .and_then(|l| l.start)
            .or_else(|| self.base(index).and_then(|l| l.start))
            .unwrap_or(1)
    }

    pub(crate) fn restart(&self, index: usize) -> RestartPolicy {
        self.overridden(index)
            .or_else(|| self.base(index))
            .map(|l| l.restart)
            .unwrap_or_default()
    }

    pub(crate) fn template(&self, index: usize) -> Option<&'a str> {
        self.overridden(index)
            .and_then(|l| l.template.as_deref())
            .or_else(|| self.base(index).and_then(|l| l.template.as_deref()))
    }

    pub(crate) fn number_format(&self, index: usize) -> NumberFormat {
        self.overridden(index)
            .and_then(|l| l.number_format)
            .or_else(|| self.base(index).and_then(|l| l.number_format))
            .unwrap_or_default()
    }

    pub(crate) fn is_legal(&self, index: usize) -> bool {
        self.overridden(index)
            .or_else(|| self.base(index))
            .is_some_and(|l| l.is_legal)
    }

    /// Check whether `index` names a level of the list or its overrides.
    pub(crate) fn contains(&self, index: usize) -> bool {
        index < self.levels.len() || self.overrides.is_some_and(|o| index < o.len())
    }
}
