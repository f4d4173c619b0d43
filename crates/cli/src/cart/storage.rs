//! Cart persistence port and its implementations.
//!
//! The cart owns one named storage slot holding the JSON-serialized line
//! list. The port is deliberately dumb - read the whole slot, write the
//! whole slot - which is exactly the contract browser local storage gave
//! the original surface.

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

/// Errors from the cart storage slot.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Underlying storage I/O failed.
    #[error("cart storage error: {0}")]
    Io(#[from] io::Error),
}

/// Persistence port for the cart's single storage slot.
///
/// `read` returns `None` when the slot has never been written. Callers own
/// interpretation of the contents; a store never parses them.
pub trait CartStore {
    /// Read the entire slot.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::Io` if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, CartStoreError>;

    /// Replace the entire slot.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::Io` if the slot cannot be written.
    fn write(&self, contents: &str) -> Result<(), CartStoreError>;
}

/// File-backed cart slot - the local-storage analog for a CLI session.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The slot's file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStore for FileCartStore {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), CartStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory cart slot for tests.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the cart persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryCartStore {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with contents (e.g., corrupt data).
    #[must_use]
    pub fn seeded(contents: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// Current slot contents, as last persisted.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl CartStore for MemoryCartStore {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<(), CartStoreError> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trips() {
        let dir = std::env::temp_dir().join(format!("hidestyle-cart-{}", std::process::id()));
        let store = FileCartStore::new(dir.join("cart.json"));

        assert!(store.read().expect("read empty").is_none());
        store.write("[]").expect("write");
        assert_eq!(store.read().expect("read").as_deref(), Some("[]"));

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryCartStore::new();
        let handle = store.clone();
        store.write("[1]").expect("write");
        assert_eq!(handle.snapshot().as_deref(), Some("[1]"));
    }
}
