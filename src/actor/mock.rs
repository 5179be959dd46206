//! # Mock Helpers
//!
//! Utilities for testing code that talks to a [`ProductClient`] without running a
//! [`ProductActor`](super::ProductActor).
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its channel,
//! then pull requests off the receiver with the `expect_*` helpers and answer them.

use super::client::ProductClient;
use super::message::{ProductRequest, Response};
use crate::model::{NewProduct, ProductId, ProductUpdate};
use tokio::sync::mpsc;

/// Creates a client whose requests land on the returned receiver.
///
/// This lets a test play the actor's part deterministically: inspect each request,
/// then answer with success, failure, or not at all.
pub fn create_mock_client(buffer_size: usize) -> (ProductClient, mpsc::Receiver<ProductRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ProductClient::new(sender), receiver)
}

/// Waits for the next request of any kind.
pub async fn expect_request(receiver: &mut mpsc::Receiver<ProductRequest>) -> Option<ProductRequest> {
    receiver.recv().await
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(NewProduct, Response<ProductId>)> {
    match receiver.recv().await {
        Some(ProductRequest::Add {
            product,
            respond_to,
        }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(ProductUpdate, Response<()>)> {
    match receiver.recv().await {
        Some(ProductRequest::Update { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}
