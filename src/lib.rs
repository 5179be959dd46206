//! # Product Manager
//!
//! > **A flat-file product catalog with validated CRUD operations.**
//!
//! This crate keeps a collection of [`Product`](model::Product) records in memory, mirrors
//! it to a JSON file after every change, and guards the two things that make the
//! collection trustworthy: ids are assigned by the manager and never reused, and no two
//! products share a business `code`.
//!
//! ## 🏗️ Design
//!
//! ### Memory First, Full Rewrite
//! Reads are served from the in-memory list. Every successful add, update or delete
//! rewrites the whole file (through a temp file and a rename). This is meant for small
//! catalogs; there is no index beyond a linear scan.
//!
//! ### Soft and Fatal Errors
//! Invalid fields, duplicate codes and unknown ids on lookup/delete are *rejected
//! requests*: they are logged, nothing changes, and the caller gets a soft
//! [`ProductError`](manager::ProductError). Updating an id that does not exist is a caller
//! bug and is reported as fatal (see [`ProductError::is_fatal`](manager::ProductError::is_fatal)).
//!
//! ### One Request at a Time
//! The manager is not synchronized. When several tasks need it, put it behind a
//! [`ProductActor`](actor::ProductActor): requests are processed sequentially, so the
//! read-modify-write of the file never interleaves.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `Product`, `ProductId` and the create/update DTOs.
//! - [`manager`] - the [`ProductManager`](manager::ProductManager) itself, its errors, validation and id sequence.
//! - [`storage`] - the [`ProductStore`](storage::ProductStore) seam with file and memory backends.
//! - [`actor`] - the actor/client pair for shared, sequential access.
//! - [`lifecycle`] - [`ProductSystem`](lifecycle::ProductSystem) start/shutdown and tracing setup.
//! - [`config`] - [`ManagerConfig`](config::ManagerConfig) and the load policy.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Replay the demo scenario against ./Products.json
//! RUST_LOG=info cargo run
//!
//! # Use another file and refuse to start on a corrupt one
//! PRODUCTS_PATH=/tmp/catalog.json PRODUCTS_STRICT_LOAD=1 cargo run
//! ```

pub mod actor;
pub mod config;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod storage;
