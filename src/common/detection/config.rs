//! Configuration types for container detection.
//!
//! This module defines the limits that bound how much of a container the
//! detector is willing to look at.

use serde::{Deserialize, Serialize};

/// Default number of bytes a container may span before detection gives up
/// on opening it (128 MiB).
pub const DEFAULT_MARK_LIMIT: usize = 128 * 1024 * 1024;

/// Default number of CompObj bytes inspected during disambiguation.
pub const DEFAULT_MAX_COMP_OBJ_BYTES: usize = 64 * 1024;

/// Default depth of the recursive DRM data space search.
pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 10;

/// Options controlling container detection.
///
/// # Examples
///
/// ```rust
/// use longan::common::detection::DetectionOptions;
///
/// // Create with defaults
/// let options = DetectionOptions::default();
///
/// // Or customize
/// let options = DetectionOptions::new()
///     .with_mark_limit(16 * 1024 * 1024)
///     .with_max_search_depth(4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Containers larger than this many bytes are not opened; they are
    /// reported as a generic OLE2 container.
    pub mark_limit: usize,
    /// Maximum number of bytes read from the CompObj stream.
    ///
    /// Only this prefix is searched, so an application name lying past the
    /// limit is missed and the rule falls back to its default kind. Real
    /// CompObj streams are a few hundred bytes.
    pub max_comp_obj_bytes: usize,
    /// Maximum storage depth visited when searching for DRM data spaces
    pub max_search_depth: usize,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            mark_limit: DEFAULT_MARK_LIMIT,
            max_comp_obj_bytes: DEFAULT_MAX_COMP_OBJ_BYTES,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
        }
    }
}

impl DetectionOptions {
    /// Create a new `DetectionOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest container size that will be opened.
    #[inline]
    pub fn with_mark_limit(mut self, limit: usize) -> Self {
        self.mark_limit = limit;
        self
    }

    /// Set how many bytes of the CompObj stream are inspected. Names past
    /// this prefix are not found.
    #[inline]
    pub fn with_max_comp_obj_bytes(mut self, limit: usize) -> Self {
        self.max_comp_obj_bytes = limit;
        self
    }

    /// Set the depth of the recursive DRM data space search.
    #[inline]
    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }
}
