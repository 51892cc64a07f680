/// Container access interface and the in-memory implementation
mod container;

/// Compound file access backed by the `cfb` crate
#[cfg(feature = "ole")]
mod file;

// Re-export public types for convenient access
pub use container::{EntryInfo, EntryKind, MemoryContainer, OleContainer};
#[cfg(feature = "ole")]
pub use file::{CompoundContainer, is_ole_file};
