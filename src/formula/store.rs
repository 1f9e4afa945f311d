use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::error::StoreError;

/// A minimal blob store: bytes in, bytes out, addressed by key.
///
/// Keys are short, file-name safe strings chosen by the caller.
pub trait KeyValueStore {
    /// Returns the blob stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `blob` under `key`, replacing any previous blob.
    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError>;
}

/// A store that keeps every blob in memory.
///
/// # Example
/// ```
/// use formulary::formula::store::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.get("k").unwrap(), None);
/// store.put("k", b"v").unwrap();
/// assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"v"[..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

/// A store that keeps each blob in its own `<key>.json` file under a root
/// directory.
///
/// The directory is created on the first write, so reading from a store that
/// was never written to simply finds nothing.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. Nothing touches the disk yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the blobs.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key);
        trace!(path = %path.display(), "reading blob");

        match fs::read(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { key: key.to_string(),
                                                source }),
        }
    }

    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        trace!(path = %path.display(), bytes = blob.len(), "writing blob");

        fs::create_dir_all(&self.root).and_then(|()| fs::write(&path, blob))
                                      .map_err(|source| StoreError::Io { key: key.to_string(),
                                                                         source })
    }
}
