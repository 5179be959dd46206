//! # Product Actor
//!
//! Puts a [`ProductManager`](crate::manager::ProductManager) behind a Tokio channel so
//! many tasks can share it while requests are still applied one at a time.
//!
//! ## Structure
//!
//! - [`ProductActor`] - owns the manager and runs the request loop
//! - [`ProductClient`] - cloneable async handle used by callers
//! - [`ProductRequest`] - the messages between them
//! - [`mock`] - helpers for testing client code without an actor
//!
//! ## Usage
//!
//! ```rust,no_run
//! use product_manager::actor::ProductActor;
//! use product_manager::manager::ProductManager;
//! use product_manager::model::NewProduct;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut manager = ProductManager::new("./Products.json");
//!     manager.initialize().await?;
//!
//!     let (actor, client) = ProductActor::new(manager, 32);
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .add_product(NewProduct::new("t", "d", 200.0, "img", "abc123", 25.0))
//!         .await?;
//!     client.delete_product(id).await?;
//!     Ok(())
//! }
//! ```

#[allow(clippy::module_inception)]
mod actor;
mod client;
mod message;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use message::*;
