//! # Product Actor
//!
//! The "server" half: owns a [`ProductManager`] and applies requests to it one at a time.

use super::client::ProductClient;
use super::message::ProductRequest;
use crate::manager::ProductManager;
use crate::storage::ProductStore;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Serializes access to a [`ProductManager`].
///
/// **Concurrency Model**:
/// The manager itself is not synchronized and each mutation is a read-modify-write of
/// the whole store. The actor owns the manager and handles one request at a time, so a
/// call always completes (including its store write) before the next one starts, no
/// matter how many tasks share the client.
///
/// # Usage Pattern
///
/// 1. **Initialize**: load the manager with [`ProductManager::initialize`].
/// 2. **Create**: call [`ProductActor::new`] to get the actor and its client.
/// 3. **Run**: spawn [`ProductActor::run`] in a background task.
///
/// The loop ends once every client clone has been dropped.
pub struct ProductActor<S: ProductStore> {
    receiver: mpsc::Receiver<ProductRequest>,
    manager: ProductManager<S>,
}

impl<S: ProductStore> ProductActor<S> {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `manager` - an initialized manager
    /// * `buffer_size` - capacity of the request channel; clients wait when it is full
    pub fn new(manager: ProductManager<S>, buffer_size: usize) -> (Self, ProductClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, manager };
        (actor, ProductClient::new(sender))
    }

    /// Runs the event loop until the channel closes, then hands the manager back.
    pub async fn run(mut self) -> ProductManager<S> {
        info!(size = self.manager.products().len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProductRequest::List { respond_to } => {
                    let result = self.manager.get_products().await.map(|p| p.to_vec());
                    debug!(ok = result.is_ok(), "List");
                    let _ = respond_to.send(result);
                }
                ProductRequest::Get { id, respond_to } => {
                    let result = self.manager.get_product_by_id(id).cloned();
                    let _ = respond_to.send(result);
                }
                ProductRequest::Add {
                    product,
                    respond_to,
                } => {
                    let result = self.manager.add_product(product).await;
                    let _ = respond_to.send(result);
                }
                ProductRequest::Update { update, respond_to } => {
                    let result = self.manager.update_product(update).await;
                    let _ = respond_to.send(result);
                }
                ProductRequest::Delete { id, respond_to } => {
                    let result = self.manager.delete_product(id).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.manager.products().len(), "Shutdown");
        self.manager
    }
}
