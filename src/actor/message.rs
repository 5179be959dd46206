//! # Product Messages
//!
//! Requests sent from a [`ProductClient`](super::ProductClient) to a
//! [`ProductActor`](super::ProductActor).

use crate::manager::ProductError;
use crate::model::{NewProduct, Product, ProductId, ProductUpdate};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, ProductError>>;

/// One variant per manager operation.
///
/// - **List**: reload from the store and return the whole collection.
/// - **Get**: look up one product by id.
/// - **Add**: validate and append a new product.
/// - **Update**: validate and merge onto an existing product.
/// - **Delete**: remove a product by id.
#[derive(Debug)]
pub enum ProductRequest {
    List {
        respond_to: Response<Vec<Product>>,
    },
    Get {
        id: ProductId,
        respond_to: Response<Product>,
    },
    Add {
        product: NewProduct,
        respond_to: Response<ProductId>,
    },
    Update {
        update: ProductUpdate,
        respond_to: Response<()>,
    },
    Delete {
        id: ProductId,
        respond_to: Response<()>,
    },
}
