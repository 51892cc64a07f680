//! OLE2 container detection entry points.
//!
//! [`detect_container`] works on any [`OleContainer`]. The byte, reader and
//! path variants open the input with `cfb` and are only available when the
//! `ole` feature is enabled.

use super::config::DetectionOptions;
use super::names::EntryNameSet;
use super::rules::detect_with_options;
use super::types::MediaKind;
use crate::ole::OleContainer;
use log::debug;

#[cfg(feature = "ole")]
use {
    super::utils::OLE2_SIGNATURE,
    crate::ole::CompoundContainer,
    std::io::{Read, Seek, SeekFrom},
    std::path::Path,
};

/// Detect the kind of an already opened container.
///
/// A container whose root cannot be listed is reported as
/// [`MediaKind::GenericOle`].
pub fn detect_container(container: &mut dyn OleContainer, options: &DetectionOptions) -> MediaKind {
    let names: EntryNameSet = match container.root_names() {
        Ok(names) => names.into_iter().collect(),
        Err(e) => {
            debug!("Cannot list root entries: {}", e);
            return MediaKind::GenericOle;
        },
    };

    detect_with_options(&names, Some(container), options)
}

/// Detect the kind of an OLE2 file held in memory.
///
/// Returns `None` when the bytes do not start with the OLE2 signature.
///
/// # Examples
///
/// ```rust
/// use longan::common::detection::detect_ole2_format;
///
/// assert_eq!(detect_ole2_format(b"PK\x03\x04 not a compound file"), None);
/// ```
#[cfg(feature = "ole")]
#[inline]
pub fn detect_ole2_format(bytes: &[u8]) -> Option<MediaKind> {
    detect_ole2_format_with_options(bytes, &DetectionOptions::default())
}

/// Same as [`detect_ole2_format`] with explicit options.
#[cfg(feature = "ole")]
pub fn detect_ole2_format_with_options(bytes: &[u8], options: &DetectionOptions) -> Option<MediaKind> {
    if !crate::ole::is_ole_file(bytes) {
        return None;
    }

    let mut cursor = std::io::Cursor::new(bytes);
    detect_ole2_format_from_reader_with_options(&mut cursor, options)
}

/// Detect the kind of an OLE2 file from a reader.
///
/// The reader is rewound before it is opened. Returns `None` when it does
/// not start with the OLE2 signature.
#[cfg(feature = "ole")]
#[inline]
pub fn detect_ole2_format_from_reader<R: Read + Seek>(reader: &mut R) -> Option<MediaKind> {
    detect_ole2_format_from_reader_with_options(reader, &DetectionOptions::default())
}

/// Same as [`detect_ole2_format_from_reader`] with explicit options.
#[cfg(feature = "ole")]
pub fn detect_ole2_format_from_reader_with_options<R: Read + Seek>(
    reader: &mut R,
    options: &DetectionOptions,
) -> Option<MediaKind> {
    let mut header = [0u8; 8];
    if reader.rewind().is_err() || reader.read_exact(&mut header).is_err() {
        return None;
    }
    if header[..] != *OLE2_SIGNATURE {
        return None;
    }

    // Too large to open; all we know is that it is a compound file
    match reader.seek(SeekFrom::End(0)) {
        Ok(len) if len > options.mark_limit as u64 => {
            debug!("Compound file of {} bytes exceeds mark limit {}", len, options.mark_limit);
            return Some(MediaKind::GenericOle);
        },
        Ok(_) => {},
        Err(e) => {
            debug!("Cannot determine compound file size: {}", e);
            return Some(MediaKind::GenericOle);
        },
    }
    if reader.rewind().is_err() {
        return Some(MediaKind::GenericOle);
    }

    match CompoundContainer::open(reader) {
        Ok(mut container) => Some(detect_container(&mut container, options)),
        Err(e) => {
            debug!("Cannot open compound file: {}", e);
            Some(MediaKind::GenericOle)
        },
    }
}

/// Detect the kind of an OLE2 file on disk.
///
/// Returns `None` when the file cannot be opened or is not a compound file.
#[cfg(feature = "ole")]
pub fn detect_file_format<P: AsRef<Path>>(path: P) -> Option<MediaKind> {
    let mut file = std::fs::File::open(path.as_ref()).ok()?;
    detect_ole2_format_from_reader(&mut file)
}
