use crate::actor::{ProductActor, ProductClient};
use crate::config::ManagerConfig;
use crate::manager::{ProductError, ProductManager};
use crate::storage::{JsonFileStore, ProductStore};
use tracing::{error, info};

/// Runtime orchestrator for a product actor.
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::start(ManagerConfig::from_env()).await?;
///
/// let id = system.product_client.add_product(params).await?;
/// let product = system.product_client.get_product_by_id(id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem<S: ProductStore = JsonFileStore> {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<ProductManager<S>>,
}

impl ProductSystem<JsonFileStore> {
    /// Starts an actor over the JSON file named in `config`.
    ///
    /// # Errors
    ///
    /// Under [`LoadPolicy::Strict`](crate::config::LoadPolicy::Strict), an unreadable or
    /// corrupt store is returned instead of starting.
    pub async fn start(config: ManagerConfig) -> Result<Self, ProductError> {
        let manager = ProductManager::from_config(&config);
        Self::start_with(manager, config.channel_capacity).await
    }
}

impl<S: ProductStore> ProductSystem<S> {
    /// Initializes `manager` and spawns an actor around it.
    pub async fn start_with(
        mut manager: ProductManager<S>,
        channel_capacity: usize,
    ) -> Result<Self, ProductError> {
        manager.initialize().await?;

        let (actor, product_client) = ProductActor::new(manager, channel_capacity.max(1));
        let handle = tokio::spawn(actor.run());

        Ok(Self {
            product_client,
            handle,
        })
    }

    /// Gracefully shuts down the actor.
    ///
    /// Drops the client, waits for the actor to drain its queue, and returns the
    /// manager with its final state.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::ActorCommunication` if the actor task panicked.
    pub async fn shutdown(self) -> Result<ProductManager<S>, ProductError> {
        info!("Shutting down product system...");

        // Dropping the last sender makes the actor's recv() return None.
        drop(self.product_client);

        match self.handle.await {
            Ok(manager) => {
                info!(size = manager.products().len(), "Product system shutdown complete.");
                Ok(manager)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(ProductError::ActorCommunication(format!(
                    "Actor task failed: {e}"
                )))
            }
        }
    }
}
