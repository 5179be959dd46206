//! Monotonic id assignment.

use crate::model::ProductId;

/// Hands out product ids that only ever increase.
///
/// Owned by a single manager. After [`advance_past`](Self::advance_past) the next id is
/// strictly greater than the given one, and the sequence never moves backwards, so
/// ids of deleted products are not handed out again. Once `u64::MAX` has been seen
/// the sequence is exhausted and hands out nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    /// `None` once every id has been used.
    next: Option<u64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> Option<ProductId> {
        self.next.map(ProductId)
    }

    pub fn next_id(&mut self) -> Option<ProductId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ProductId(id))
    }

    /// Makes sure no id up to and including `id` is handed out later.
    pub fn advance_past(&mut self, id: ProductId) {
        self.next = match (self.next, id.0.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
