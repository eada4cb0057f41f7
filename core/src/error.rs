//! Error types for the todo store.
//!
//! # Design
//! The store can only fail by not finding an id. Payload shape problems never
//! reach the store; the HTTP layer rejects them before a candidate exists.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item with the requested id is in the collection.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}
