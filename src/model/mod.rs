//! Pure data structures (DTOs) handled by the [`ProductManager`](crate::manager::ProductManager).

pub mod product;

pub use product::*;
