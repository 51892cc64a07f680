//! CompObj stream sniffing and recursive entry search.
//!
//! Several applications share identical top-level names and only differ in
//! the ANSI application name recorded in the `\u{1}CompObj` stream. These
//! helpers read that stream (bounded by [`DetectionOptions`]) and search it
//! for the known application names.

use super::config::DetectionOptions;
use super::names::{COMP_OBJ, fold};
use super::types::MediaKind;
use crate::ole::OleContainer;
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;

/// Application names searched for, in priority order, and the kind each
/// one identifies.
const COMP_OBJ_SIGNATURES: [(&str, MediaKind); 4] = [
    // The full designator carries a version, e.g. "MSGraph.Chart.8"
    ("MSGraph.Chart", MediaKind::GraphChart),
    ("StarDraw", MediaKind::StarDraw),
    ("StarImpress", MediaKind::StarImpress),
    // Works 4.0 word processor files
    ("Quill96", MediaKind::WorksWordProcessor),
];

// Built once; the needles are fixed ASCII strings so construction cannot fail
static COMP_OBJ_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(COMP_OBJ_SIGNATURES.iter().map(|(needle, _)| *needle))
        .expect("Failed to build CompObj matcher")
});

/// Identify the application named in CompObj bytes.
///
/// The search is case-sensitive. When several names occur, the one listed
/// first in priority order wins regardless of position.
pub fn sniff_comp_obj_bytes(bytes: &[u8]) -> Option<MediaKind> {
    COMP_OBJ_MATCHER
        .find_overlapping_iter(bytes)
        .map(|m| m.pattern().as_usize())
        .min()
        .map(|index| COMP_OBJ_SIGNATURES[index].1)
}

/// Read the root CompObj stream of `root` and identify the application it
/// names.
///
/// Any failure (no such entry, a storage instead of a stream, an I/O error)
/// is treated as "no match".
pub fn sniff_comp_obj(root: &mut dyn OleContainer, options: &DetectionOptions) -> Option<MediaKind> {
    let entries = match root.list_entries(&[]) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list root entries while looking for CompObj: {}", e);
            return None;
        },
    };

    let wanted = fold(COMP_OBJ);
    let entry = entries
        .into_iter()
        .find(|entry| !entry.is_storage() && fold(&entry.name) == wanted)?;

    match root.read_stream(&[entry.name.as_str()], options.max_comp_obj_bytes) {
        Ok(bytes) => sniff_comp_obj_bytes(&bytes),
        Err(e) => {
            debug!("Cannot read CompObj stream: {}", e);
            None
        },
    }
}

/// Search the storage tree below `root` for an entry named `target`
/// (case-insensitive), descending at most `max_depth` levels.
pub fn find_entry_recursively(root: &dyn OleContainer, target: &str, max_depth: usize) -> bool {
    let target = fold(target);
    let mut pending: Vec<(Vec<String>, usize)> = vec![(Vec::new(), 0)];

    while let Some((path, depth)) = pending.pop() {
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        let entries = match root.list_entries(&segments) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list storage '{}': {}", path.join("/"), e);
                continue;
            },
        };

        for entry in entries {
            if fold(&entry.name) == target {
                return true;
            }
            if entry.is_storage() && depth + 1 < max_depth {
                let mut child = path.clone();
                child.push(entry.name);
                pending.push((child, depth + 1));
            }
        }
    }

    false
}
