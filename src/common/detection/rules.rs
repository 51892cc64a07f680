//! The ordered rule table mapping top-level entry names to a [`MediaKind`].
//!
//! Rules are evaluated top to bottom and the first one that resolves wins.
//! Order is significant: Works 7.0 spreadsheets carry both `WksSSWorkBook`
//! and `Workbook`, so the Works rule must come before the Excel rule, and
//! `CONTENTS` is only a bare embedding once every `CONTENTS` + companion
//! rule has been tried.

use super::comp_obj::{find_entry_recursively, sniff_comp_obj};
use super::config::DetectionOptions;
use super::names::*;
use super::types::MediaKind;
use crate::ole::OleContainer;
use log::debug;

/// What a rule yields once its name predicate matches.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    /// A fixed kind.
    Kind(MediaKind),
    /// Consult the CompObj stream: a sniffed kind listed in `accept` is
    /// returned as is, anything else (including no root, an unreadable
    /// stream, or no match) yields `otherwise`.
    CompObj {
        accept: &'static [MediaKind],
        otherwise: MediaKind,
    },
    /// Search the storage tree for an entry named `target`. Found yields
    /// `kind`; not found (or no root) lets evaluation continue.
    FindEntry {
        target: &'static str,
        kind: MediaKind,
    },
}

/// One entry of the detection table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Short identifier used in diagnostics
    pub name: &'static str,
    /// Predicate over the root entry names
    pub matches: fn(&EntryNameSet) -> bool,
    /// Result when the predicate holds
    pub outcome: Outcome,
}

/// Mutable state threaded through rule evaluation.
struct Probe<'r, 'o> {
    root: Option<&'r mut dyn OleContainer>,
    options: &'o DetectionOptions,
}

impl Outcome {
    fn resolve(&self, probe: &mut Probe<'_, '_>) -> Option<MediaKind> {
        match *self {
            Outcome::Kind(kind) => Some(kind),
            Outcome::CompObj { accept, otherwise } => {
                let options = probe.options;
                let sniffed = probe
                    .root
                    .as_deref_mut()
                    .and_then(|root| sniff_comp_obj(root, options));
                Some(sniffed.filter(|kind| accept.contains(kind)).unwrap_or(otherwise))
            },
            Outcome::FindEntry { target, kind } => {
                let root = probe.root.as_deref()?;
                find_entry_recursively(root, target, probe.options.max_search_depth).then_some(kind)
            },
        }
    }
}

/// The detection table, in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        // Works 7.0 spreadsheets also contain "Workbook"
        name: "works-spreadsheet",
        matches: |n| n.contains(WKS_SS_WORKBOOK),
        outcome: Outcome::Kind(MediaKind::WorksSpreadsheet),
    },
    Rule {
        name: "workbook",
        matches: |n| n.contains_any(&[WORKBOOK, BOOK]),
        outcome: Outcome::CompObj {
            accept: &[MediaKind::GraphChart],
            otherwise: MediaKind::Spreadsheet,
        },
    },
    Rule {
        name: "word-document",
        matches: |n| n.contains(WORD_DOCUMENT),
        outcome: Outcome::Kind(MediaKind::WordProcessor),
    },
    Rule {
        name: "powerpoint-document",
        matches: |n| n.contains(POWERPOINT_DOCUMENT),
        outcome: Outcome::Kind(MediaKind::Presentation),
    },
    Rule {
        name: "visio-document",
        matches: |n| n.contains(VISIO_DOCUMENT),
        outcome: Outcome::Kind(MediaKind::Drawing),
    },
    Rule {
        name: "publisher",
        matches: |n| n.contains(QUILL),
        outcome: Outcome::Kind(MediaKind::Publisher),
    },
    Rule {
        name: "ole10-native",
        matches: |n| n.contains(OLE10_NATIVE),
        outcome: Outcome::Kind(MediaKind::Ole10NativeEmbedding),
    },
    Rule {
        name: "drm-data-space",
        matches: |n| n.contains(DATA_SPACES),
        outcome: Outcome::FindEntry {
            target: DRM_DATA_SPACE,
            kind: MediaKind::DrmEncrypted,
        },
    },
    Rule {
        // "\u{6}DataSpaces" usually accompanies these but is not required
        name: "protected-ooxml",
        matches: |n| n.contains_all(&[ENCRYPTED_PACKAGE, ENCRYPTION_INFO]),
        outcome: Outcome::Kind(MediaKind::ProtectedOoxml),
    },
    Rule {
        name: "drm-encrypted-package",
        matches: |n| n.contains_all(&[ENCRYPTED_PACKAGE, DATA_SPACES]),
        outcome: Outcome::FindEntry {
            target: DRM_ENCRYPTED_DATA_SPACE,
            kind: MediaKind::DrmEncrypted,
        },
    },
    Rule {
        name: "encrypted-package",
        matches: |n| n.contains(ENCRYPTED_PACKAGE),
        outcome: Outcome::Kind(MediaKind::GenericOle),
    },
    Rule {
        name: "star-calc",
        matches: |n| n.contains(STAR_CALC_DOCUMENT),
        outcome: Outcome::Kind(MediaKind::StarCalc),
    },
    Rule {
        name: "star-writer",
        matches: |n| n.contains(STAR_WRITER_DOCUMENT),
        outcome: Outcome::Kind(MediaKind::StarWriter),
    },
    Rule {
        name: "solidworks",
        matches: |n| n.contains_all(&[SW_DOC_CONTENT_MGR, SW_DOC_MGR_TEMP_STORAGE]),
        outcome: Outcome::Kind(MediaKind::SolidWorks),
    },
    Rule {
        // Draw and Impress share this stream; only CompObj tells them apart
        name: "star-draw",
        matches: |n| n.contains(STAR_DRAW_DOCUMENT_3),
        outcome: Outcome::CompObj {
            accept: &[MediaKind::StarDraw, MediaKind::StarImpress],
            otherwise: MediaKind::GenericOle,
        },
    },
    Rule {
        // Works 3.0 and 4.0 word processor
        name: "works-mat-ost",
        matches: |n| n.contains(MAT_OST),
        outcome: Outcome::Kind(MediaKind::WorksWordProcessor),
    },
    Rule {
        name: "works-spelling",
        matches: |n| n.contains_all(&[CONTENTS, SPELLING]),
        outcome: Outcome::Kind(MediaKind::WorksWordProcessor),
    },
    Rule {
        name: "equation",
        matches: |n| n.contains(EQUATION_NATIVE),
        outcome: Outcome::Kind(MediaKind::Equation),
    },
    Rule {
        // ActiveX controls are plain OLE, not CompObj embeddings
        name: "activex",
        matches: |n| n.contains(OCX_NAME),
        outcome: Outcome::Kind(MediaKind::GenericOle),
    },
    Rule {
        name: "contents-obj-info",
        matches: |n| n.contains_all(&[CONTENTS, OBJ_INFO]),
        outcome: Outcome::Kind(MediaKind::GenericCompObjEmbedding),
    },
    Rule {
        name: "contents-comp-obj",
        matches: |n| n.contains_all(&[CONTENTS, COMP_OBJ]),
        outcome: Outcome::CompObj {
            accept: &[MediaKind::WorksWordProcessor],
            otherwise: MediaKind::GenericCompObjEmbedding,
        },
    },
    Rule {
        // Some non-office file embedded in an OLE2 document
        name: "contents",
        matches: |n| n.contains(CONTENTS),
        outcome: Outcome::Kind(MediaKind::GenericOle),
    },
    Rule {
        name: "project",
        matches: |n| {
            n.contains(COMP_OBJ)
                && n.contains_any(&[PROPS, PROPS_9, PROPS_12])
                && n.iter().any(is_project_data_name)
        },
        outcome: Outcome::Kind(MediaKind::Project),
    },
    Rule {
        name: "esri-layer",
        matches: |n| n.contains(LAYER),
        outcome: Outcome::Kind(MediaKind::EsriLayer),
    },
    Rule {
        name: "dgn8",
        matches: |n| n.contains_all(&[DGN_MF, DGN_S, DGN_H]),
        outcome: Outcome::Kind(MediaKind::Dgn8),
    },
    Rule {
        name: "outlook-message",
        matches: |n| n.any_starts_with(SUBSTG_PREFIX),
        outcome: Outcome::Kind(MediaKind::MailMessage),
    },
];

/// Detect the kind of a compound container from its root entry names.
///
/// `root` gives access to the container itself; it is only needed to
/// disambiguate formats whose names collide. Without it those formats
/// resolve to their conservative fallback.
///
/// # Examples
///
/// ```rust
/// use longan::common::detection::{EntryNameSet, MediaKind, detect};
///
/// let names: EntryNameSet = ["WksSSWorkBook", "Workbook"].into_iter().collect();
/// assert_eq!(detect(&names, None), MediaKind::WorksSpreadsheet);
///
/// assert_eq!(detect(&EntryNameSet::new(), None), MediaKind::GenericOle);
/// ```
#[inline]
pub fn detect(names: &EntryNameSet, root: Option<&mut dyn OleContainer>) -> MediaKind {
    detect_with_options(names, root, &DetectionOptions::default())
}

/// Same as [`detect`] with explicit options.
pub fn detect_with_options(
    names: &EntryNameSet,
    root: Option<&mut dyn OleContainer>,
    options: &DetectionOptions,
) -> MediaKind {
    if names.is_empty() {
        return MediaKind::GenericOle;
    }

    let mut probe = Probe { root, options };
    for rule in RULES {
        if !(rule.matches)(names) {
            continue;
        }
        if let Some(kind) = rule.outcome.resolve(&mut probe) {
            debug!("OLE2 rule '{}' matched: {:?}", rule.name, kind);
            return kind;
        }
    }

    debug!("No OLE2 rule matched {} root entries", names.len());
    MediaKind::GenericOle
}
