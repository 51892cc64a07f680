//! Unified error types for Longan library.
//!
//! This module provides a unified error type that encompasses errors from both
//! container access and numbering definition parsing, presenting a consistent
//! API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
