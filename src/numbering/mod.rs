//! List numbering.
//!
//! Word processing formats describe numbered and bulleted lists as a table
//! of per-level rules (start value, restart policy, numeral style and a
//! template such as `"%1.%2."`). Paragraphs only say which list and level
//! they belong to; the visible number has to be computed by replaying the
//! paragraphs in document order. This module does that replay.
//!
//! - [`LevelCounter`] is the counter state of one list.
//! - [`ListManager`] owns the counters of every list in a document.
//! - [`docx::NumberingPart`] reads list tables from a WordprocessingML
//!   `numbering.xml` part (feature `ooxml`).
//!
//! # Examples
//!
//! ```rust
//! use longan::numbering::{ListLevel, ListManager, NumberFormat};
//!
//! let mut manager = ListManager::new();
//! manager.add_list(0, vec![
//!     ListLevel::new("%1."),
//!     ListLevel::new("%1.%2.").with_format(NumberFormat::LowerRoman),
//! ]);
//!
//! let numbers: Vec<String> = [0, 1, 1, 0]
//!     .into_iter()
//!     .filter_map(|level| manager.increment(0, level, None))
//!     .collect();
//! assert_eq!(numbers, ["1. ", "1.i. ", "1.ii. ", "2. "]);
//! ```

pub mod config;
pub mod counter;
#[cfg(feature = "ooxml")]
pub mod docx;
pub mod format;
pub mod level;
pub mod manager;

pub use config::NumberingOptions;
pub use counter::{Counter, LevelCounter};
pub use format::NumberFormat;
pub use level::{ListLevel, RestartPolicy};
pub use manager::ListManager;
