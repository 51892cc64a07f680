//! Per-document registry of lists, list instances and their counters.

use super::config::NumberingOptions;
use super::counter::LevelCounter;
use super::level::ListLevel;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// A numbering instance: a list definition plus optional level overrides.
#[derive(Debug, Clone)]
struct ListInstance {
    list_id: u32,
    overrides: Option<Arc<[ListLevel]>>,
}

/// Tracks every list of one document.
///
/// Lists are registered once with their level table. Paragraphs then refer
/// either to a list directly or to an instance of it; all instances of a
/// list share one counter. Counters are created on first use and dropped by
/// [`reset`](Self::reset).
///
/// # Examples
///
/// ```rust
/// use longan::numbering::{ListLevel, ListManager, NumberFormat};
///
/// let mut manager = ListManager::new();
/// manager.add_list(1, vec![
///     ListLevel::new("%1."),
///     ListLevel::new("%2)").with_format(NumberFormat::LowerLetter),
/// ]);
/// manager.add_instance(7, 1, None);
///
/// assert_eq!(manager.formatted_number(7, 0).as_deref(), Some("1. "));
/// assert_eq!(manager.formatted_number(7, 1).as_deref(), Some("a) "));
/// assert_eq!(manager.formatted_number(7, 1).as_deref(), Some("b) "));
/// assert_eq!(manager.formatted_number(99, 0), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListManager {
    lists: HashMap<u32, Arc<[ListLevel]>>,
    instances: HashMap<u32, ListInstance>,
    counters: HashMap<u32, LevelCounter>,
    options: NumberingOptions,
}

impl ListManager {
    /// Create an empty manager with default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager with explicit rendering options.
    pub fn with_options(options: NumberingOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Register the level table of a list, replacing any previous table
    /// with the same id.
    pub fn add_list(&mut self, list_id: u32, levels: impl Into<Arc<[ListLevel]>>) {
        self.lists.insert(list_id, levels.into());
        // A replaced table invalidates its counter
        self.counters.remove(&list_id);
    }

    /// Register a numbering instance of `list_id`.
    pub fn add_instance(
        &mut self,
        instance_id: u32,
        list_id: u32,
        overrides: Option<Vec<ListLevel>>,
    ) {
        self.instances.insert(
            instance_id,
            ListInstance {
                list_id,
                overrides: overrides.map(Into::into),
            },
        );
    }

    /// Level table of a registered list.
    #[inline]
    pub fn list(&self, list_id: u32) -> Option<&[ListLevel]> {
        self.lists.get(&list_id).map(|levels| &**levels)
    }

    /// Check whether `list_id` has a level table.
    #[inline]
    pub fn has_list(&self, list_id: u32) -> bool {
        self.lists.contains_key(&list_id)
    }

    /// Number of registered lists.
    #[inline]
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of registered instances.
    #[inline]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Counter state of a list, if a paragraph has used it yet.
    #[inline]
    pub fn counter(&self, list_id: u32) -> Option<&LevelCounter> {
        self.counters.get(&list_id)
    }

    /// Advance the counter of `list_id` at `level`.
    ///
    /// Returns `None` when the list is not registered.
    pub fn increment(
        &mut self,
        list_id: u32,
        level: usize,
        overrides: Option<&[ListLevel]>,
    ) -> Option<String> {
        let counter = match self.counters.entry(list_id) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let Some(levels) = self.lists.get(&list_id) else {
                    debug!("Paragraph refers to unknown list {}", list_id);
                    return None;
                };
                entry.insert(LevelCounter::with_options(
                    Arc::clone(levels),
                    self.options.clone(),
                ))
            },
        };
        Some(counter.increment_level(level, overrides))
    }

    /// Number text for a paragraph that refers to `instance_id` at `level`.
    ///
    /// Instance ids and list ids are separate namespaces. Returns `None` for
    /// an id with no registered instance; paragraphs that refer to a list
    /// directly go through [`increment`](Self::increment).
    pub fn formatted_number(&mut self, instance_id: u32, level: usize) -> Option<String> {
        let Some(instance) = self.instances.get(&instance_id) else {
            debug!("Paragraph refers to unknown list instance {}", instance_id);
            return None;
        };
        let list_id = instance.list_id;
        let overrides = instance.overrides.clone();
        self.increment(list_id, level, overrides.as_deref())
    }

    /// Discard every counter, keeping the registered lists and instances.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_list_is_none() {
        let mut manager = ListManager::new();
        assert_eq!(manager.increment(3, 0, None), None);
        assert!(manager.counter(3).is_none());
    }

    #[test]
    fn test_instances_share_list_counter() {
        let mut manager = ListManager::new();
        manager.add_list(1, vec![ListLevel::new("%1.")]);
        manager.add_instance(10, 1, None);
        manager.add_instance(11, 1, None);

        assert_eq!(manager.formatted_number(10, 0).as_deref(), Some("1. "));
        assert_eq!(manager.formatted_number(11, 0).as_deref(), Some("2. "));
        assert_eq!(manager.increment(1, 0, None).as_deref(), Some("3. "));
    }

    #[test]
    fn test_list_id_is_not_an_instance_id() {
        let mut manager = ListManager::new();
        manager.add_list(0, vec![ListLevel::new("%1.")]);
        manager.add_instance(1, 0, None);

        assert_eq!(manager.formatted_number(0, 0), None);
        assert!(manager.counter(0).is_none());
        assert_eq!(manager.formatted_number(1, 0).as_deref(), Some("1. "));
    }

    #[test]
    fn test_instance_overrides_apply() {
        let mut manager = ListManager::new();
        manager.add_list(1, vec![ListLevel::new("%1.")]);
        manager.add_instance(2, 1, Some(vec![ListLevel::new("(%1)").with_start(4)]));

        assert_eq!(manager.formatted_number(2, 0).as_deref(), Some("(4) "));
        assert_eq!(manager.formatted_number(2, 0).as_deref(), Some("(5) "));
    }

    #[test]
    fn test_reset_and_replace() {
        let mut manager = ListManager::new();
        manager.add_list(1, vec![ListLevel::new("%1.")]);
        manager.increment(1, 0, None);
        manager.increment(1, 0, None);
        manager.reset();
        assert_eq!(manager.increment(1, 0, None).as_deref(), Some("1. "));

        manager.add_list(1, vec![ListLevel::new("%1:")]);
        assert_eq!(manager.increment(1, 0, None).as_deref(), Some("1: "));
        assert_eq!(manager.list_count(), 1);
    }

    #[test]
    fn test_custom_bullet() {
        let mut manager = ListManager::with_options(NumberingOptions::new().with_bullet("*"));
        manager.add_list(5, vec![ListLevel::bullet()]);
        assert_eq!(manager.increment(5, 0, None).as_deref(), Some("* "));
    }
}
