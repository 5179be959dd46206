//! Error types for the product manager.

use crate::model::{ProductField, ProductId};
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// A field is blank, not a finite number, or (for `code`) holds disallowed characters.
    #[error("Invalid product field: {0}")]
    InvalidField(ProductField),

    /// Another product already uses this code.
    #[error("Product code already exists: {0}")]
    DuplicateCode(String),

    /// No product has this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// An update targeted an id that is not in the collection.
    #[error("Cannot update unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Every id up to `u64::MAX` has been assigned.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// A mutation was issued before the collection was loaded.
    #[error("Product manager used before initialize")]
    NotInitialized,

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the product actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl ProductError {
    /// Whether this error signals a broken caller contract or a failed write,
    /// as opposed to a rejected request the caller can simply report.
    pub fn is_fatal(&self) -> bool {
        match self {
            ProductError::InvalidField(_)
            | ProductError::DuplicateCode(_)
            | ProductError::NotFound(_) => false,
            ProductError::UnknownProduct(_)
            | ProductError::IdsExhausted
            | ProductError::NotInitialized
            | ProductError::Storage(_)
            | ProductError::ActorCommunication(_) => true,
        }
    }
}
