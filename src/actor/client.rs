//! # Product Client
//!
//! Provides a high-level API for interacting with a [`ProductActor`](super::ProductActor).

use super::message::ProductRequest;
use crate::manager::ProductError;
use crate::model::{NewProduct, Product, ProductId, ProductUpdate};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle to a running [`ProductActor`](super::ProductActor).
///
/// Holds only a sender, so clones are cheap and can be moved into other tasks.
#[derive(Clone)]
pub struct ProductClient {
    sender: mpsc::Sender<ProductRequest>,
}

impl ProductClient {
    pub fn new(sender: mpsc::Sender<ProductRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        request: impl FnOnce(oneshot::Sender<Result<T, ProductError>>) -> ProductRequest,
    ) -> Result<T, ProductError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| ProductError::ActorCommunication("Actor closed".into()))?;
        response
            .await
            .map_err(|_| ProductError::ActorCommunication("Actor dropped response channel".into()))?
    }

    /// Reloads the collection from the store and returns it.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.call(|respond_to| ProductRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.call(|respond_to| ProductRequest::Get { id, respond_to })
            .await
    }

    /// Adds a product and returns its new id.
    #[instrument(skip(self, product), fields(code = %product.code))]
    pub async fn add_product(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        debug!(?product, "Sending request");
        self.call(|respond_to| ProductRequest::Add {
            product,
            respond_to,
        })
        .await
    }

    /// Merges `update` onto the product with the same id.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        update: impl Into<ProductUpdate> + Send,
    ) -> Result<(), ProductError> {
        let update: ProductUpdate = update.into();
        debug!(?update, "Sending request");
        self.call(|respond_to| ProductRequest::Update { update, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.call(|respond_to| ProductRequest::Delete { id, respond_to })
            .await
    }
}
