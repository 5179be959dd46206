//! # Product Manager
//!
//! The manager owns an ordered, in-memory list of [`Product`] records mirrored to a
//! [`ProductStore`]. Reads are served from memory; every successful mutation rewrites
//! the whole collection to the store.
//!
//! ## Structure
//!
//! - [`error`] - [`ProductError`] and its fatal/soft classification
//! - [`validation`] - field checks shared by add and update
//! - [`ids`] - [`IdSequence`], the per-manager monotonic id counter
//!
//! ## Usage
//!
//! ```rust,no_run
//! use product_manager::manager::ProductManager;
//! use product_manager::model::NewProduct;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut manager = ProductManager::new("./Products.json");
//!     manager.initialize().await?;
//!
//!     let id = manager
//!         .add_product(NewProduct::new("t", "d", 200.0, "img", "abc123", 25.0))
//!         .await?;
//!     assert_eq!(manager.get_product_by_id(id)?.stock, 25.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Signals
//!
//! Rejected requests (invalid field, duplicate code, unknown id on lookup or delete) are
//! logged at `warn` and returned as soft errors; nothing is changed or written. An update
//! for an id that is not in the collection is a caller bug and is reported as the fatal
//! [`ProductError::UnknownProduct`].

pub mod error;
pub mod ids;
pub mod validation;

pub use error::*;
pub use ids::*;

use crate::config::{LoadPolicy, ManagerConfig};
use crate::model::{NewProduct, Product, ProductId, ProductUpdate};
use crate::storage::{JsonFileStore, ProductStore};
use tracing::{debug, error, info, warn};
use validation::{validate, Fields};

/// Manages a product collection backed by a [`ProductStore`].
///
/// The manager is not internally synchronized. Callers that share one between
/// tasks go through a [`ProductActor`](crate::actor::ProductActor), which processes
/// requests one at a time.
pub struct ProductManager<S: ProductStore = JsonFileStore> {
    store: S,
    products: Vec<Product>,
    ids: IdSequence,
    load_policy: LoadPolicy,
    loaded: bool,
}

impl ProductManager<JsonFileStore> {
    /// Creates a manager for the JSON file at `path`. Call
    /// [`initialize`](Self::initialize) before mutating.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self::with_store(JsonFileStore::new(path))
    }

    pub fn from_config(config: &ManagerConfig) -> Self {
        Self::new(config.store_path.clone()).with_load_policy(config.load_policy)
    }
}

impl<S: ProductStore> ProductManager<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            products: Vec::new(),
            ids: IdSequence::new(),
            load_policy: LoadPolicy::default(),
            loaded: false,
        }
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The in-memory collection, without reloading from the store.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The id the next successful add will receive, or `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<ProductId> {
        self.ids.peek()
    }

    /// Loads the collection and positions the id sequence past the highest stored id.
    ///
    /// Must be called before any mutation.
    pub async fn initialize(&mut self) -> Result<(), ProductError> {
        self.reload().await?;
        info!(
            store = %self.store.location().display(),
            count = self.products.len(),
            next_id = ?self.ids.peek(),
            "Initialized"
        );
        Ok(())
    }

    /// Reloads the collection from the store and returns it in stored order.
    ///
    /// External edits of the store are picked up. Under [`LoadPolicy::Lenient`] an
    /// unreadable or corrupt store yields an empty collection.
    pub async fn get_products(&mut self) -> Result<&[Product], ProductError> {
        self.reload().await?;
        Ok(&self.products)
    }

    /// Looks up a product by id in the in-memory collection.
    pub fn get_product_by_id(&self, id: ProductId) -> Result<&Product, ProductError> {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                debug!(%id, "Get");
                Ok(product)
            }
            None => {
                warn!(%id, "Product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Validates and appends a new product, then persists the collection.
    ///
    /// Returns the assigned id.
    pub async fn add_product(&mut self, params: NewProduct) -> Result<ProductId, ProductError> {
        debug!(?params, "Add");
        self.ensure_loaded()?;
        reject(validate(Fields::from(&params)))?;

        if self.products.iter().any(|p| p.code == params.code) {
            warn!(code = %params.code, "Product code already exists");
            return Err(ProductError::DuplicateCode(params.code));
        }

        let Some(id) = self.ids.peek() else {
            error!("No product ids left");
            return Err(ProductError::IdsExhausted);
        };
        let mut products = self.products.clone();
        products.push(Product::new(id, params));
        self.commit(products).await?;
        self.ids.advance_past(id);
        info!(%id, size = self.products.len(), "Created");
        Ok(id)
    }

    /// Validates the supplied fields and merges them onto the stored record with
    /// the same id, then persists the collection.
    ///
    /// Passing a full [`Product`] replaces every field except the id.
    pub async fn update_product(
        &mut self,
        update: impl Into<ProductUpdate>,
    ) -> Result<(), ProductError> {
        let update: ProductUpdate = update.into();
        let id = update.id;
        debug!(?update, "Update");
        self.ensure_loaded()?;
        reject(validate(Fields::from(&update)))?;

        if let Some(code) = &update.code {
            if self.products.iter().any(|p| p.code == *code && p.id != id) {
                warn!(%id, %code, "Product code already exists");
                return Err(ProductError::DuplicateCode(code.clone()));
            }
        }

        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            error!(%id, "Update for unknown product");
            return Err(ProductError::UnknownProduct(id));
        };
        let mut products = self.products.clone();
        products[index].apply(update);
        self.commit(products).await?;
        info!(%id, "Updated");
        Ok(())
    }

    /// Removes the product with `id`, then persists the collection.
    pub async fn delete_product(&mut self, id: ProductId) -> Result<(), ProductError> {
        debug!(%id, "Delete");
        self.ensure_loaded()?;

        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            warn!(%id, "Product not found");
            return Err(ProductError::NotFound(id));
        };
        let mut products = self.products.clone();
        products.remove(index);
        self.commit(products).await?;
        info!(%id, size = self.products.len(), "Deleted");
        Ok(())
    }

    async fn reload(&mut self) -> Result<(), ProductError> {
        let products = match self.store.load().await {
            Ok(Some(products)) => products,
            Ok(None) => Vec::new(),
            Err(e) => match self.load_policy {
                LoadPolicy::Lenient => {
                    error!(error = %e, "Store unusable, continuing with an empty collection");
                    Vec::new()
                }
                LoadPolicy::Strict => {
                    error!(error = %e, "Store unusable");
                    return Err(e.into());
                }
            },
        };

        if let Some(max) = products.iter().map(|p| p.id).max() {
            self.ids.advance_past(max);
        }
        self.products = products;
        self.loaded = true;
        debug!(count = self.products.len(), "Loaded");
        Ok(())
    }

    /// Writes `products` to the store and only then makes it the in-memory
    /// collection. A failed write leaves the manager as it was.
    async fn commit(&mut self, products: Vec<Product>) -> Result<(), ProductError> {
        if let Err(e) = self.store.save(&products).await {
            error!(error = %e, "Failed to persist products");
            return Err(e.into());
        }
        self.products = products;
        Ok(())
    }

    fn ensure_loaded(&self) -> Result<(), ProductError> {
        if self.loaded {
            Ok(())
        } else {
            error!("Mutation before initialize");
            Err(ProductError::NotInitialized)
        }
    }
}

fn reject(result: Result<(), ProductError>) -> Result<(), ProductError> {
    if let Err(e) = &result {
        warn!(error = %e, "Rejected");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductField;
    use crate::storage::MemoryStore;

    fn sample(code: &str) -> NewProduct {
        NewProduct::new("producto prueba", "Este es un producto prueba", 200.0, "Sin Imagen", code, 25.0)
    }

    async fn ready() -> (ProductManager<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let mut manager = ProductManager::with_store(store.clone());
        manager.initialize().await.unwrap();
        (manager, store)
    }

    #[tokio::test]
    async fn test_mutations_require_initialize() {
        let store = MemoryStore::new();
        let mut manager = ProductManager::with_store(store.clone());

        let result = manager.add_product(sample("abc123")).await;
        assert!(matches!(result, Err(ProductError::NotInitialized)));
        assert!(matches!(
            manager.delete_product(ProductId(1)).await,
            Err(ProductError::NotInitialized)
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_get_products_counts_as_load() {
        let store = MemoryStore::new();
        let mut manager = ProductManager::with_store(store);

        assert!(manager.get_products().await.unwrap().is_empty());
        assert!(manager.add_product(sample("abc123")).await.is_ok());
    }

    #[tokio::test]
    async fn test_initialize_positions_ids_after_max() {
        let seed = MemoryStore::new();
        {
            let mut manager = ProductManager::with_store(seed.clone());
            manager.initialize().await.unwrap();
            manager.add_product(sample("a")).await.unwrap();
            manager.add_product(sample("b")).await.unwrap();
            manager.add_product(sample("c")).await.unwrap();
            manager.delete_product(ProductId(1)).await.unwrap();
        }

        let mut manager = ProductManager::with_store(seed);
        manager.initialize().await.unwrap();
        assert_eq!(manager.next_id(), Some(ProductId(4)));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (mut manager, _) = ready().await;
        manager.add_product(sample("a")).await.unwrap();
        let second = manager.add_product(sample("b")).await.unwrap();
        manager.delete_product(second).await.unwrap();

        let third = manager.add_product(sample("c")).await.unwrap();
        assert_eq!(third, ProductId(3));
    }

    #[tokio::test]
    async fn test_rejections_leave_store_untouched() {
        let (mut manager, store) = ready().await;
        manager.add_product(sample("abc123")).await.unwrap();
        assert_eq!(store.save_count(), 1);

        let mut blank = sample("other");
        blank.title = " ".into();
        assert!(matches!(
            manager.add_product(blank).await,
            Err(ProductError::InvalidField(ProductField::Title))
        ));
        assert!(matches!(
            manager.add_product(sample("abc123")).await,
            Err(ProductError::DuplicateCode(code)) if code == "abc123"
        ));
        assert!(matches!(
            manager.delete_product(ProductId(5)).await,
            Err(ProductError::NotFound(ProductId(5)))
        ));

        assert_eq!(store.save_count(), 1);
        assert_eq!(manager.products().len(), 1);
        assert_eq!(manager.next_id(), Some(ProductId(2)));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_collection_unchanged() {
        let (mut manager, store) = ready().await;
        let id = manager.add_product(sample("a")).await.unwrap();
        store.fail_saves(true);

        assert!(matches!(
            manager.add_product(sample("b")).await,
            Err(ProductError::Storage(_))
        ));
        assert!(matches!(
            manager.update_product(ProductUpdate::new(id).with_title("renamed")).await,
            Err(ProductError::Storage(_))
        ));
        assert!(matches!(
            manager.delete_product(id).await,
            Err(ProductError::Storage(_))
        ));

        assert_eq!(manager.products().len(), 1);
        assert_eq!(manager.get_product_by_id(id).unwrap().title, "producto prueba");
        assert!(matches!(
            manager.get_product_by_id(ProductId(2)),
            Err(ProductError::NotFound(_))
        ));
        assert_eq!(manager.next_id(), Some(ProductId(2)));

        // Once the store recovers the same add goes through with the same id.
        store.fail_saves(false);
        assert_eq!(manager.add_product(sample("b")).await.unwrap(), ProductId(2));
    }

    #[tokio::test]
    async fn test_add_fails_once_ids_are_exhausted() {
        let store = MemoryStore::with_raw(
            r#"[{"id":18446744073709551615,"title":"t","description":"d","price":1,"thumbnail":"i","code":"x","stock":2}]"#,
        );
        let mut manager = ProductManager::with_store(store.clone());
        manager.initialize().await.unwrap();

        assert_eq!(manager.next_id(), None);
        let err = manager.add_product(sample("y")).await.unwrap_err();
        assert!(matches!(err, ProductError::IdsExhausted));
        assert!(err.is_fatal());
        assert_eq!(manager.products().len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_code_uniqueness_is_case_sensitive() {
        let (mut manager, _) = ready().await;
        manager.add_product(sample("abc")).await.unwrap();
        assert!(manager.add_product(sample("ABC")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_checks_in_order() {
        let (mut manager, store) = ready().await;
        manager.add_product(sample("a")).await.unwrap();
        manager.add_product(sample("b")).await.unwrap();

        // Invalid field wins over an unknown id.
        let bad = ProductUpdate::new(ProductId(99)).with_title("");
        assert!(matches!(
            manager.update_product(bad).await,
            Err(ProductError::InvalidField(ProductField::Title))
        ));

        // Duplicate code wins over an unknown id.
        let dup = ProductUpdate::new(ProductId(99)).with_code("a");
        assert!(matches!(
            manager.update_product(dup).await,
            Err(ProductError::DuplicateCode(_))
        ));

        let unknown = ProductUpdate::new(ProductId(99)).with_stock(1.0);
        let err = manager.update_product(unknown).await.unwrap_err();
        assert!(matches!(err, ProductError::UnknownProduct(ProductId(99))));
        assert!(err.is_fatal());

        assert_eq!(store.save_count(), 2);
    }

    #[tokio::test]
    async fn test_update_may_keep_its_own_code() {
        let (mut manager, _) = ready().await;
        let id = manager.add_product(sample("abc123")).await.unwrap();
        let mut product = manager.get_product_by_id(id).unwrap().clone();
        product.title = "renamed".into();

        manager.update_product(product).await.unwrap();

        assert_eq!(manager.get_product_by_id(id).unwrap().title, "renamed");
    }

    #[tokio::test]
    async fn test_update_cannot_take_another_code() {
        let (mut manager, _) = ready().await;
        manager.add_product(sample("a")).await.unwrap();
        let id = manager.add_product(sample("b")).await.unwrap();

        let result = manager
            .update_product(ProductUpdate::new(id).with_code("a"))
            .await;

        assert!(matches!(result, Err(ProductError::DuplicateCode(_))));
        assert_eq!(manager.get_product_by_id(id).unwrap().code, "b");
    }

    #[tokio::test]
    async fn test_get_products_picks_up_external_edits() {
        let (mut manager, store) = ready().await;
        manager.add_product(sample("a")).await.unwrap();

        store.set_raw(
            r#"[{"id":7,"title":"t","description":"d","price":1,"thumbnail":"i","code":"x","stock":2}]"#,
        );

        let products = manager.get_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId(7));
        assert_eq!(manager.next_id(), Some(ProductId(8)));
    }

    #[tokio::test]
    async fn test_lenient_load_degrades_to_empty() {
        let store = MemoryStore::with_raw("not json");
        let mut manager = ProductManager::with_store(store);

        manager.initialize().await.unwrap();

        assert!(manager.products().is_empty());
        assert_eq!(manager.next_id(), Some(ProductId(1)));
    }

    #[tokio::test]
    async fn test_strict_load_surfaces_corruption() {
        let store = MemoryStore::with_raw("not json");
        let mut manager = ProductManager::with_store(store).with_load_policy(LoadPolicy::Strict);

        let err = manager.initialize().await.unwrap_err();

        assert!(matches!(
            err,
            ProductError::Storage(crate::storage::StorageError::Corrupt { .. })
        ));
        assert!(matches!(
            manager.add_product(sample("a")).await,
            Err(ProductError::NotInitialized)
        ));
    }
}
