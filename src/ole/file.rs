use super::container::{EntryInfo, OleContainer};
use crate::common::detection::utils::OLE2_SIGNATURE;
use crate::common::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

/// Compound container backed by the `cfb` crate.
///
/// This is the production [`OleContainer`]: sector chains, FAT/MiniFAT and
/// the red-black directory tree are all handled by `cfb`, we only translate
/// entry paths and errors.
pub struct CompoundContainer<R> {
    inner: cfb::CompoundFile<R>,
}

impl<R: Read + Seek> CompoundContainer<R> {
    /// Open a compound file from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOleFile`] when the reader is not a compound file,
    /// or [`Error::Io`] when the underlying structure cannot be read.
    pub fn open(mut reader: R) -> Result<Self> {
        let mut header = [0u8; 8];
        reader.read_exact(&mut header).map_err(|_| Error::NotOleFile)?;
        if header[..] != *OLE2_SIGNATURE {
            return Err(Error::NotOleFile);
        }
        reader.rewind()?;

        let inner = cfb::CompoundFile::open(reader)?;
        Ok(Self { inner })
    }

    /// Wrap an already opened `cfb` compound file.
    #[inline]
    pub fn from_compound_file(inner: cfb::CompoundFile<R>) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying `cfb` compound file.
    #[inline]
    pub fn into_inner(self) -> cfb::CompoundFile<R> {
        self.inner
    }

    /// Check whether an entry exists at `path`.
    pub fn exists(&self, path: &[&str]) -> bool {
        self.inner.exists(entry_path(path))
    }
}

impl CompoundContainer<File> {
    /// Open a compound file from disk.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(File::open(path)?)
    }
}

impl<R: Read + Seek> OleContainer for CompoundContainer<R> {
    fn list_entries(&self, path: &[&str]) -> Result<Vec<EntryInfo>> {
        let entries = self
            .inner
            .read_storage(entry_path(path))
            .map_err(|e| not_found_or_io(path, e))?;

        Ok(entries
            .map(|entry| {
                if entry.is_storage() {
                    EntryInfo::storage(entry.name())
                } else {
                    EntryInfo::stream(entry.name())
                }
            })
            .collect())
    }

    fn read_stream(&mut self, path: &[&str], limit: usize) -> Result<Vec<u8>> {
        let stream = self
            .inner
            .open_stream(entry_path(path))
            .map_err(|e| not_found_or_io(path, e))?;

        let mut data = Vec::new();
        stream.take(limit as u64).read_to_end(&mut data)?;
        Ok(data)
    }
}

impl<R> std::fmt::Debug for CompoundContainer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundContainer").finish_non_exhaustive()
    }
}

/// Check whether a byte buffer starts with the OLE2 signature.
#[inline]
pub fn is_ole_file(data: &[u8]) -> bool {
    data.len() >= OLE2_SIGNATURE.len() && data[..OLE2_SIGNATURE.len()] == *OLE2_SIGNATURE
}

fn entry_path(path: &[&str]) -> PathBuf {
    let mut full = PathBuf::from("/");
    full.extend(path);
    full
}

fn not_found_or_io(path: &[&str], err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::ComponentNotFound(path.join("/"))
    } else {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn build(streams: &[(&str, &[u8])]) -> Vec<u8> {
        let mut comp = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
        for (path, data) in streams {
            let mut stream = comp.create_stream(path).unwrap();
            stream.write_all(data).unwrap();
        }
        comp.flush().unwrap();
        comp.into_inner().into_inner()
    }

    #[test]
    fn test_is_ole_file() {
        assert!(is_ole_file(OLE2_SIGNATURE));
        assert!(!is_ole_file(b"PK\x03\x04zipzip"));
        assert!(!is_ole_file(&OLE2_SIGNATURE[..4]));
    }

    #[test]
    fn test_open_rejects_non_ole() {
        let result = CompoundContainer::open(Cursor::new(b"definitely not a compound file".to_vec()));
        assert!(matches!(result, Err(Error::NotOleFile)));

        let result = CompoundContainer::open(Cursor::new(vec![0u8; 3]));
        assert!(matches!(result, Err(Error::NotOleFile)));
    }

    #[test]
    fn test_list_and_read() {
        let bytes = build(&[
            ("/WordDocument", &b"hello world"[..]),
            ("/\u{1}CompObj", &b"Quill96"[..]),
        ]);
        let mut container = CompoundContainer::open(Cursor::new(bytes)).unwrap();

        let mut names = container.root_names().unwrap();
        names.sort();
        assert_eq!(names, vec!["\u{1}CompObj".to_string(), "WordDocument".to_string()]);

        assert_eq!(container.read_stream(&["WordDocument"], 5).unwrap(), b"hello");
        assert_eq!(container.read_stream(&["\u{1}CompObj"], 1024).unwrap(), b"Quill96");
        assert!(container.exists(&["WordDocument"]));
        assert!(!container.exists(&["Workbook"]));
    }

    #[test]
    fn test_missing_stream_is_not_found() {
        let bytes = build(&[("/Workbook", &b"x"[..])]);
        let mut container = CompoundContainer::open(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            container.read_stream(&["Book"], 10),
            Err(Error::ComponentNotFound(_))
        ));
    }
}
