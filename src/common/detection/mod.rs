//! Compound (OLE2) container type detection.
//!
//! Legacy Office documents and a long tail of other applications all store
//! their data in the same compound file format. The only reliable way to
//! tell them apart is by the names of the entries in the root storage, with
//! the CompObj stream consulted where names collide.
//!
//! Detection never fails: anything that is a compound file but matches no
//! rule is reported as [`MediaKind::GenericOle`].
//!
//! # Examples
//!
//! ```rust
//! use longan::common::detection::{EntryNameSet, MediaKind, detect};
//!
//! let names: EntryNameSet = ["\u{1}CompObj", "Props", "   114"].into_iter().collect();
//! assert_eq!(detect(&names, None), MediaKind::Project);
//! ```

pub mod comp_obj;
pub mod config;
pub mod names;
pub mod ole2;
pub mod rules;
pub mod types;
pub mod utils;

pub use comp_obj::{find_entry_recursively, sniff_comp_obj, sniff_comp_obj_bytes};
pub use config::DetectionOptions;
pub use names::EntryNameSet;
pub use ole2::detect_container;
#[cfg(feature = "ole")]
pub use ole2::{
    detect_file_format, detect_ole2_format, detect_ole2_format_from_reader,
    detect_ole2_format_from_reader_with_options, detect_ole2_format_with_options,
};
pub use rules::{Outcome, RULES, Rule, detect, detect_with_options};
pub use types::MediaKind;

#[cfg(test)]
mod tests;
