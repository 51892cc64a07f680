//! Per-list counter state and number rendering.

use super::config::NumberingOptions;
use super::format::NumberFormat;
use super::level::{LevelView, ListLevel};
use log::trace;
use memchr::memchr;
use smallvec::SmallVec;
use std::sync::Arc;

/// State of one level's counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Counter {
    /// Never visited, or reset by a shallower level
    #[default]
    Unvisited,
    /// Passed over on the way to a deeper level; holds the start value and
    /// restarts like a visited level
    Skipped(u32),
    /// Visited at least once
    Value(u32),
}

impl Counter {
    /// Value shown when a placeholder refers to this counter.
    #[inline]
    pub fn display_value(self) -> u32 {
        match self {
            Counter::Unvisited => 1,
            Counter::Skipped(n) | Counter::Value(n) => n,
        }
    }
}

/// Counters for one list, advanced one paragraph at a time.
///
/// Calls must follow document order. A fresh counter is created per list
/// and per document.
///
/// # Examples
///
/// ```rust
/// use longan::numbering::{LevelCounter, ListLevel};
///
/// let mut counter = LevelCounter::new(vec![ListLevel::new("%1."), ListLevel::new("%1.%2.")]);
/// assert_eq!(counter.increment_level(0, None), "1. ");
/// assert_eq!(counter.increment_level(1, None), "1.1. ");
/// assert_eq!(counter.increment_level(0, None), "2. ");
/// ```
#[derive(Debug, Clone)]
pub struct LevelCounter {
    levels: Arc<[ListLevel]>,
    counters: SmallVec<[Counter; 9]>,
    last_level: Option<usize>,
    options: NumberingOptions,
}

impl LevelCounter {
    /// Create a counter for a list with the given levels.
    pub fn new(levels: impl Into<Arc<[ListLevel]>>) -> Self {
        Self::with_options(levels, NumberingOptions::default())
    }

    /// Create a counter with explicit rendering options.
    pub fn with_options(levels: impl Into<Arc<[ListLevel]>>, options: NumberingOptions) -> Self {
        Self {
            levels: levels.into(),
            counters: SmallVec::new(),
            last_level: None,
            options,
        }
    }

    /// Level definitions this counter renders with.
    #[inline]
    pub fn levels(&self) -> &[ListLevel] {
        &self.levels
    }

    /// Current state of the counter at `level`.
    #[inline]
    pub fn counter(&self, level: usize) -> Counter {
        self.counters.get(level).copied().unwrap_or_default()
    }

    /// Level of the most recent paragraph, if any.
    #[inline]
    pub fn last_level(&self) -> Option<usize> {
        self.last_level
    }

    /// Advance the counter for a paragraph at `level` and return its
    /// rendered number, including the trailing space.
    pub fn increment_level(&mut self, level: usize, overrides: Option<&[ListLevel]>) -> String {
        let levels = Arc::clone(&self.levels);
        let view = LevelView {
            levels: &levels,
            overrides,
        };

        self.backfill(level, &view);
        self.reset_deeper(level, &view);

        let next = match self.counters.get(level) {
            Some(Counter::Value(n)) | Some(Counter::Skipped(n)) => n.saturating_add(1),
            Some(Counter::Unvisited) | None => view.start(level),
        };
        self.set(level, Counter::Value(next));
        self.last_level = Some(level);

        self.render(level, &view)
    }

    /// Forget all counter state.
    pub fn reset(&mut self) {
        self.counters.clear();
        self.last_level = None;
    }

    /// Levels skipped between the last paragraph and this one keep their
    /// start value so that `%n` placeholders referring to them render it.
    fn backfill(&mut self, level: usize, view: &LevelView<'_>) {
        let first = self.last_level.map_or(0, |last| last + 1);
        for index in first..level {
            if self.counter(index) == Counter::Unvisited {
                let start = view.start(index);
                trace!("Level {} skipped, holding start value {}", index, start);
                self.set(index, Counter::Skipped(start));
            }
        }
    }

    fn reset_deeper(&mut self, level: usize, view: &LevelView<'_>) {
        for index in level + 1..self.counters.len() {
            if self.counters[index] == Counter::Unvisited {
                continue;
            }
            match view.restart(index).resets_on(level) {
                None => return,
                Some(true) => {
                    trace!("Level {} restarted by level {}", index, level);
                    self.counters[index] = Counter::Unvisited;
                },
                Some(false) => {},
            }
        }
    }

    fn set(&mut self, index: usize, counter: Counter) {
        if self.counters.len() <= index {
            self.counters.resize(index + 1, Counter::Unvisited);
        }
        self.counters[index] = counter;
    }

    fn render(&self, level: usize, view: &LevelView<'_>) -> String {
        if !view.contains(level) {
            return String::new();
        }
        if view.number_format(level) == NumberFormat::Bullet {
            let mut out = self.options.bullet.clone();
            out.push(' ');
            return out;
        }
        let Some(template) = view.template(level) else {
            return String::new();
        };

        let legal = view.is_legal(level);
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len() + 8);
        let mut pos = 0;

        while let Some(offset) = memchr(b'%', &bytes[pos..]) {
            let at = pos + offset;
            out.push_str(&template[pos..at]);

            let digits = bytes[at + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                // Not a placeholder
                out.push('%');
                pos = at + 1;
                continue;
            }

            let end = at + 1 + digits;
            let index = atoi_simd::parse_pos::<u32, false>(&bytes[at + 1..end])
                .ok()
                .and_then(|d| (d as usize).checked_sub(1));
            let (value, format) = match index {
                Some(index) => (self.counter(index).display_value(), view.number_format(index)),
                None => (1, NumberFormat::Decimal),
            };
            let format = if legal { NumberFormat::Decimal } else { format };
            format.write(value, &mut out);
            pos = end;
        }
        out.push_str(&template[pos..]);

        if !out.is_empty() {
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::RestartPolicy;

    #[test]
    fn test_counter_display_value() {
        assert_eq!(Counter::Unvisited.display_value(), 1);
        assert_eq!(Counter::Skipped(4).display_value(), 4);
        assert_eq!(Counter::Value(0).display_value(), 0);
    }

    #[test]
    fn test_first_visit_uses_start() {
        let mut counter = LevelCounter::new(vec![ListLevel::new("%1)").with_start(5)]);
        assert_eq!(counter.increment_level(0, None), "5) ");
        assert_eq!(counter.increment_level(0, None), "6) ");
        assert_eq!(counter.counter(0), Counter::Value(6));
        assert_eq!(counter.last_level(), Some(0));
    }

    #[test]
    fn test_zero_start_renders_zero() {
        let mut counter = LevelCounter::new(vec![ListLevel::new("%1.").with_start(0)]);
        assert_eq!(counter.increment_level(0, None), "0. ");
        assert_eq!(counter.increment_level(0, None), "1. ");
    }

    #[test]
    fn test_never_stops_reset_cascade() {
        let levels = vec![
            ListLevel::new("%1."),
            ListLevel::new("%1.%2.").with_restart(RestartPolicy::Never),
            ListLevel::new("%1.%2.%3."),
        ];
        let mut counter = LevelCounter::new(levels);
        counter.increment_level(0, None);
        counter.increment_level(1, None);
        counter.increment_level(2, None);
        assert_eq!(counter.increment_level(0, None), "2. ");
        // Neither level 1 nor the level below it restarted
        assert_eq!(counter.counter(1), Counter::Value(1));
        assert_eq!(counter.counter(2), Counter::Value(1));
        assert_eq!(counter.increment_level(1, None), "2.2. ");
        assert_eq!(counter.counter(2), Counter::Unvisited);
    }

    #[test]
    fn test_percent_without_digits_is_literal() {
        let mut counter = LevelCounter::new(vec![ListLevel::new("100%: %1")]);
        assert_eq!(counter.increment_level(0, None), "100%: 1 ");
        let mut counter = LevelCounter::new(vec![ListLevel::new("%")]);
        assert_eq!(counter.increment_level(0, None), "% ");
    }

    #[test]
    fn test_placeholder_out_of_range_renders_one() {
        let mut counter = LevelCounter::new(vec![ListLevel::new("%1-%7-%0")]);
        assert_eq!(counter.increment_level(0, None), "1-1-1 ");
    }

    #[test]
    fn test_reset_forgets_state() {
        let mut counter = LevelCounter::new(vec![ListLevel::new("%1.")]);
        counter.increment_level(0, None);
        counter.increment_level(0, None);
        counter.reset();
        assert_eq!(counter.counter(0), Counter::Unvisited);
        assert_eq!(counter.last_level(), None);
        assert_eq!(counter.increment_level(0, None), "1. ");
    }
}
