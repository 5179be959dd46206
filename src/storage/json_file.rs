//! Flat-file JSON store.

use super::{from_json, to_pretty_json, ProductStore, StorageError};
use crate::model::Product;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the collection as a tab-indented JSON array in a single file.
///
/// Saves go through a sibling `<file>.tmp` that is renamed over the target, so a
/// crash mid-write leaves either the old or the new collection on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Removes a leftover temp file after a failed save.
    async fn discard(&self, temp: &Path) {
        if let Err(e) = tokio::fs::remove_file(temp).await {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %temp.display(), error = %e, "Failed to remove temp file");
            }
        }
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<Product>>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        from_json(self.path.clone(), &bytes).map(Some)
    }

    async fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let bytes = to_pretty_json(products)?;
        let temp = self.temp_path();
        if let Err(source) = tokio::fs::write(&temp, &bytes).await {
            self.discard(&temp).await;
            return Err(StorageError::Write { path: temp, source });
        }
        if let Err(source) = tokio::fs::rename(&temp, &self.path).await {
            self.discard(&temp).await;
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }
        debug!(path = %self.path.display(), count = products.len(), bytes = bytes.len(), "Store written");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewProduct, ProductId};
    use tempfile::TempDir;

    fn product(id: u64, code: &str) -> Product {
        Product::new(
            ProductId(id),
            NewProduct::new("producto prueba", "Este es un producto prueba", 200.0, "Sin Imagen", code, 25.0),
        )
    }

    #[tokio::test]
    async fn test_missing_file_is_first_run() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("Products.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("Products.json"));
        let products = vec![product(1, "abc123"), product(2, "abc124")];

        store.save(&products).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(products));
    }

    #[tokio::test]
    async fn test_save_uses_tab_indentation_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Products.json");
        let store = JsonFileStore::new(&path);

        store.save(&[product(1, "abc123")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n\t{\n\t\t\"id\": 1,"), "unexpected layout: {text}");
        assert!(!dir.path().join("Products.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("Products.json"));

        store.save(&[product(1, "a"), product(2, "b")]).await.unwrap();
        store.save(&[product(2, "b")]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(vec![product(2, "b")]));
    }

    #[tokio::test]
    async fn test_malformed_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Products.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Products.json");
        std::fs::create_dir(&path).unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.save(&[product(1, "abc123")]).await.unwrap_err();

        assert!(matches!(err, StorageError::Write { .. }), "got {err:?}");
        assert!(path.is_dir());
        assert!(!dir.path().join("Products.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }), "got {err:?}");
    }
}
