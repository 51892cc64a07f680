//! Common types shared across the crate.
//!
//! This module provides container detection and the unified error type
//! used by the container accessors and the numbering readers.

// Submodule declarations
pub mod detection;
pub mod error;

// Re-exports for convenience
pub use detection::{MediaKind, detect_container};
#[cfg(feature = "ole")]
pub use detection::{detect_file_format, detect_ole2_format};
pub use error::{Error, Result};
