//! Access to the directory tree of a compound (OLE2/CFB) container.
//!
//! The sniffer never parses sectors itself. It only needs to enumerate
//! entry names and, for a handful of ambiguous formats, read one small
//! stream. [`OleContainer`] captures exactly that surface so that callers
//! can plug in whatever compound-file reader they already have.

use crate::common::error::{Error, Result};
use std::collections::BTreeMap;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A byte stream
    Stream,
    /// A storage (sub-directory)
    Storage,
}

/// Name and kind of a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name exactly as stored in the container
    pub name: String,
    /// Stream or storage
    pub kind: EntryKind,
}

impl EntryInfo {
    /// Create a stream entry.
    #[inline]
    pub fn stream(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Stream,
        }
    }

    /// Create a storage entry.
    #[inline]
    pub fn storage(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Storage,
        }
    }

    /// Check whether this entry is a storage.
    #[inline]
    pub fn is_storage(&self) -> bool {
        self.kind == EntryKind::Storage
    }
}

/// Read access to a compound container's directory tree.
///
/// Paths are given as slices of entry names relative to the root, so the
/// root itself is `&[]` and the CompObj stream is `&["\u{1}CompObj"]`.
pub trait OleContainer {
    /// List the immediate children of the storage at `path`.
    fn list_entries(&self, path: &[&str]) -> Result<Vec<EntryInfo>>;

    /// Read at most `limit` bytes of the stream at `path`.
    fn read_stream(&mut self, path: &[&str], limit: usize) -> Result<Vec<u8>>;

    /// Names of the immediate children of the root storage.
    fn root_names(&self) -> Result<Vec<String>> {
        Ok(self
            .list_entries(&[])?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }
}

/// Node of a [`MemoryContainer`] tree.
#[derive(Debug, Clone)]
enum Node {
    Stream(Vec<u8>),
    Storage(BTreeMap<String, Node>),
}

/// An in-memory compound container.
///
/// Useful when a caller has already decoded a compound file with some other
/// library, and for building fixtures.
///
/// # Examples
///
/// ```rust
/// use longan::ole::{MemoryContainer, OleContainer};
///
/// let mut container = MemoryContainer::new();
/// container.add_stream(&["WordDocument"], vec![0u8; 16]);
/// container.add_stream(&["ObjectPool", "_1234", "\u{1}CompObj"], b"StarDraw".to_vec());
///
/// assert_eq!(container.root_names()?, vec!["ObjectPool", "WordDocument"]);
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    root: BTreeMap<String, Node>,
}

impl MemoryContainer {
    /// Create an empty container.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stream, creating intermediate storages as needed.
    ///
    /// An existing entry at the same path is replaced. An empty path is
    /// ignored.
    pub fn add_stream(&mut self, path: &[&str], data: Vec<u8>) {
        if let Some((name, parents)) = path.split_last() {
            self.storage_mut(parents)
                .insert((*name).to_string(), Node::Stream(data));
        }
    }

    /// Insert an (empty) storage, creating intermediate storages as needed.
    pub fn add_storage(&mut self, path: &[&str]) {
        self.storage_mut(path);
    }

    /// Builder-style variant of [`add_stream`](Self::add_stream).
    #[inline]
    pub fn with_stream(mut self, path: &[&str], data: Vec<u8>) -> Self {
        self.add_stream(path, data);
        self
    }

    fn storage_mut(&mut self, path: &[&str]) -> &mut BTreeMap<String, Node> {
        let mut current = &mut self.root;
        for name in path {
            let node = current
                .entry((*name).to_string())
                .or_insert_with(|| Node::Storage(BTreeMap::new()));
            if matches!(node, Node::Stream(_)) {
                *node = Node::Storage(BTreeMap::new());
            }
            current = match node {
                Node::Storage(children) => children,
                Node::Stream(_) => unreachable!("stream nodes are replaced above"),
            };
        }
        current
    }

    fn storage(&self, path: &[&str]) -> Result<&BTreeMap<String, Node>> {
        let mut current = &self.root;
        for name in path {
            current = match current.get(*name) {
                Some(Node::Storage(children)) => children,
                Some(Node::Stream(_)) => {
                    return Err(Error::InvalidFormat(format!("'{}' is a stream", name)));
                },
                None => return Err(Error::ComponentNotFound(path.join("/"))),
            };
        }
        Ok(current)
    }
}

impl OleContainer for MemoryContainer {
    fn list_entries(&self, path: &[&str]) -> Result<Vec<EntryInfo>> {
        Ok(self
            .storage(path)?
            .iter()
            .map(|(name, node)| match node {
                Node::Stream(_) => EntryInfo::stream(name.clone()),
                Node::Storage(_) => EntryInfo::storage(name.clone()),
            })
            .collect())
    }

    fn read_stream(&mut self, path: &[&str], limit: usize) -> Result<Vec<u8>> {
        let (name, parents) = path
            .split_last()
            .ok_or_else(|| Error::InvalidFormat("the root is not a stream".to_string()))?;
        match self.storage(parents)?.get(*name) {
            Some(Node::Stream(data)) => Ok(data[..data.len().min(limit)].to_vec()),
            Some(Node::Storage(_)) => Err(Error::InvalidFormat(format!("'{}' is a storage", name))),
            None => Err(Error::ComponentNotFound(path.join("/"))),
        }
    }
}
