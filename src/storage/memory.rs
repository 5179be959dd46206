//! In-memory store.

use super::{from_json, to_pretty_json, ProductStore, StorageError};
use crate::model::Product;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Contents {
    bytes: Option<Vec<u8>>,
    saves: usize,
    fail_saves: bool,
}

/// Keeps the serialized collection in memory.
///
/// Clones share the same contents, so a test can hand one clone to a manager and
/// inspect the other. Contents go through the same JSON encoding as
/// [`JsonFileStore`](super::JsonFileStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Arc<Mutex<Contents>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `bytes`, well-formed or not.
    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.set_raw(bytes);
        store
    }

    /// Replaces the stored bytes, as an external edit of the file would.
    pub fn set_raw(&self, bytes: impl Into<Vec<u8>>) {
        self.lock().bytes = Some(bytes.into());
    }

    /// The stored bytes as text, if anything was stored.
    pub fn raw(&self) -> Option<String> {
        self.lock()
            .bytes
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// Makes every following save fail with [`StorageError::Write`] until reset.
    pub fn fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Contents> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<Product>>, StorageError> {
        let bytes = self.lock().bytes.clone();
        bytes.map(|b| from_json(self.location(), &b)).transpose()
    }

    async fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let bytes = to_pretty_json(products)?;
        let mut contents = self.lock();
        if contents.fail_saves {
            return Err(StorageError::Write {
                path: self.location(),
                source: std::io::Error::other("save disabled"),
            });
        }
        contents.bytes = Some(bytes);
        contents.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory")
    }
}
