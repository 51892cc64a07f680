//! Well-known top-level entry names and the name set the rules match on.
//!
//! MS-CFB compares directory entry names case-insensitively, so the set
//! keeps an upper-cased copy of every name and all lookups go through it.

use std::collections::HashSet;

pub const WORKBOOK: &str = "Workbook";
/// Excel 5.0/95 workbook stream
pub const BOOK: &str = "Book";
pub const WKS_SS_WORKBOOK: &str = "WksSSWorkBook";
pub const WORD_DOCUMENT: &str = "WordDocument";
pub const POWERPOINT_DOCUMENT: &str = "PowerPoint Document";
pub const VISIO_DOCUMENT: &str = "VisioDocument";
pub const QUILL: &str = "Quill";
pub const OLE10_NATIVE: &str = "\u{1}Ole10Native";
pub const ENCRYPTED_PACKAGE: &str = "EncryptedPackage";
pub const ENCRYPTION_INFO: &str = "EncryptionInfo";
pub const DATA_SPACES: &str = "\u{6}DataSpaces";
pub const DRM_DATA_SPACE: &str = "\tDRMDataSpace";
pub const DRM_ENCRYPTED_DATA_SPACE: &str = "DRMEncryptedDataSpace";
pub const STAR_CALC_DOCUMENT: &str = "StarCalcDocument";
pub const STAR_WRITER_DOCUMENT: &str = "StarWriterDocument";
pub const STAR_DRAW_DOCUMENT_3: &str = "StarDrawDocument3";
pub const SW_DOC_CONTENT_MGR: &str = "SwDocContentMgr";
pub const SW_DOC_MGR_TEMP_STORAGE: &str = "SwDocMgrTempStorage";
pub const MAT_OST: &str = "MatOST";
pub const CONTENTS: &str = "CONTENTS";
pub const SPELLING: &str = "SPELLING";
pub const OBJ_INFO: &str = "\u{3}ObjInfo";
pub const COMP_OBJ: &str = "\u{1}CompObj";
pub const PROPS: &str = "Props";
pub const PROPS_9: &str = "Props9";
pub const PROPS_12: &str = "Props12";
pub const EQUATION_NATIVE: &str = "Equation Native";
/// ActiveX control name stream
pub const OCX_NAME: &str = "\u{3}OCXNAME";
pub const LAYER: &str = "Layer";
pub const DGN_MF: &str = "Dgn~Mf";
pub const DGN_S: &str = "Dgn~S";
pub const DGN_H: &str = "Dgn~H";
/// Prefix of every MAPI property stream in an Outlook message
pub const SUBSTG_PREFIX: &str = "__substg1.0_";

/// Upper-case a name the way entry names are compared.
#[inline]
pub(crate) fn fold(name: &str) -> String {
    name.to_uppercase()
}

/// The set of immediate child names of a container's root storage.
///
/// # Examples
///
/// ```rust
/// use longan::common::detection::EntryNameSet;
///
/// let names: EntryNameSet = ["WordDocument", "1Table"].into_iter().collect();
/// assert!(names.contains("worddocument"));
/// assert!(!names.contains("Workbook"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryNameSet {
    folded: HashSet<String>,
}

impl EntryNameSet {
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name to the set.
    #[inline]
    pub fn insert(&mut self, name: &str) {
        self.folded.insert(fold(name));
    }

    /// Check whether the set holds `name`, ignoring case.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.folded.contains(&fold(name))
    }

    /// Check whether the set holds every one of `names`.
    #[inline]
    pub fn contains_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.contains(name))
    }

    /// Check whether the set holds at least one of `names`.
    #[inline]
    pub fn contains_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.contains(name))
    }

    /// Check whether any name starts with `prefix`, ignoring case.
    pub fn any_starts_with(&self, prefix: &str) -> bool {
        let prefix = fold(prefix);
        self.folded.iter().any(|name| name.starts_with(&prefix))
    }

    /// Iterate over the upper-cased names.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.folded.iter().map(String::as_str)
    }

    /// Number of distinct names.
    #[inline]
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    /// Check whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for EntryNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// Check whether a name looks like a Project data storage: three spaces
/// followed by one or more digits (e.g. `"   114"`).
pub(crate) fn is_project_data_name(name: &str) -> bool {
    name.strip_prefix("   ")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
