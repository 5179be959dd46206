//! # Backing Stores
//!
//! The [`ProductManager`](crate::manager::ProductManager) keeps its collection in memory
//! and mirrors it to a [`ProductStore`] after every successful mutation. The store always
//! receives the full collection; there is no incremental write.
//!
//! - [`JsonFileStore`]: the flat JSON file used in production.
//! - [`MemoryStore`]: keeps the serialized collection in memory.

pub mod json_file;
pub mod memory;

pub use json_file::*;
pub use memory::*;

use crate::model::Product;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store exists but could not be read.
    #[error("failed to read product store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store was read but does not hold a product list.
    #[error("product store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be written back.
    #[error("failed to write product store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize products: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Durable home of a product collection.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// Reads the whole collection.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet (first run).
    async fn load(&self) -> Result<Option<Vec<Product>>, StorageError>;

    /// Replaces the stored collection with `products`.
    async fn save(&self, products: &[Product]) -> Result<(), StorageError>;

    /// Human-readable location, used in logs and errors.
    fn location(&self) -> PathBuf;
}

/// Serializes a collection the way it is laid out on disk: a JSON array
/// indented with tabs.
pub fn to_pretty_json(products: &[Product]) -> Result<Vec<u8>, StorageError> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    products
        .serialize(&mut serializer)
        .map_err(StorageError::Serialize)?;
    Ok(buf)
}

/// Parses a stored collection.
pub fn from_json(path: PathBuf, bytes: &[u8]) -> Result<Vec<Product>, StorageError> {
    serde_json::from_slice(bytes).map_err(|source| StorageError::Corrupt { path, source })
}
