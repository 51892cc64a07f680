//! Unified error types for Longan library.
//!
//! This module provides a unified error type that encompasses errors from
//! compound container access and numbering definition parsing, presenting a
//! consistent API to users.
use thiserror::Error;

/// Main error type for Longan operations.
///
/// Container sniffing itself never fails; this type is returned by the
/// container accessors and by the numbering definition readers.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input does not start with the OLE2 signature
    #[error("Not a valid OLE2 compound file")]
    NotOleFile,

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Stream or storage not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
