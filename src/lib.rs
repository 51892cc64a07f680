//! Longan - compound file sniffing and list numbering for Office documents
//!
//! This library covers two small pieces of legacy Office document handling
//! that every extraction pipeline ends up needing:
//!
//! - **Container detection**: tell which application wrote an OLE2
//!   compound file (Word, Excel, PowerPoint, Works, StarOffice, Outlook,
//!   encrypted OOXML and more) from its root entry names.
//! - **List numbering**: turn per-level list definitions and a stream of
//!   "paragraph at level N" events into the visible numbers ("1.", "1.2.",
//!   "iv)", bullets).
//!
//! # Features
//!
//! - `ole` (default): open compound files with the `cfb` crate
//! - `ooxml` (default): read list definitions from WordprocessingML
//!   `numbering.xml` parts with `quick-xml`
//!
//! # Example - Detecting a compound file
//!
//! ```no_run
//! use longan::common::detection::detect_file_format;
//!
//! match detect_file_format("report.doc") {
//!     Some(kind) => println!("{} ({})", kind.mime_type(), kind.extension().unwrap_or("?")),
//!     None => println!("Not a compound file"),
//! }
//! ```
//!
//! # Example - Detecting from entry names
//!
//! ```rust
//! use longan::{EntryNameSet, MediaKind, detect};
//!
//! let names: EntryNameSet = ["__substg1.0_0037001F", "__properties_version1.0"]
//!     .into_iter()
//!     .collect();
//! assert_eq!(detect(&names, None), MediaKind::MailMessage);
//! ```
//!
//! # Example - Numbering paragraphs
//!
//! ```rust
//! use longan::numbering::{ListLevel, ListManager};
//!
//! let mut manager = ListManager::new();
//! manager.add_list(1, vec![ListLevel::new("%1."), ListLevel::new("%1.%2.")]);
//!
//! assert_eq!(manager.increment(1, 0, None).as_deref(), Some("1. "));
//! assert_eq!(manager.increment(1, 1, None).as_deref(), Some("1.1. "));
//! assert_eq!(manager.increment(1, 1, None).as_deref(), Some("1.2. "));
//! assert_eq!(manager.increment(1, 0, None).as_deref(), Some("2. "));
//! ```

/// Common types shared across the crate
///
/// This module contains container detection and the unified error type.
pub mod common;

/// Compound (OLE2) container access
///
/// The [`ole::OleContainer`] trait is what detection reads from. It is
/// implemented by an in-memory tree and, with the `ole` feature, by a
/// wrapper around `cfb::CompoundFile`.
pub mod ole;

/// List numbering engine
pub mod numbering;

// Re-export commonly used types for convenience
pub use common::detection::{DetectionOptions, EntryNameSet, MediaKind, detect};
pub use common::{Error, Result};
pub use numbering::{ListLevel, ListManager, NumberFormat};
