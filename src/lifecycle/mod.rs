//! # System Lifecycle
//!
//! Starting, wiring and shutting down the product actor.
//!
//! ## The ProductSystem Pattern
//!
//! [`ProductSystem::start`] performs the steps every caller would otherwise repeat:
//!
//! 1. **Build** a [`ProductManager`](crate::manager::ProductManager) from a
//!    [`ManagerConfig`](crate::config::ManagerConfig)
//! 2. **Initialize** it, so ids continue after the highest stored one
//! 3. **Spawn** a [`ProductActor`](crate::actor::ProductActor) that owns it
//! 4. **Expose** the cloneable [`ProductClient`](crate::actor::ProductClient)
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the task returns the manager with its final state
//!
//! Clones of the client held elsewhere keep the actor alive; drop them first.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary. See the
//! [`tracing`](self::tracing) module for the fields each operation logs.

pub mod product_system;
pub mod tracing;

pub use product_system::*;
pub use self::tracing::*;
