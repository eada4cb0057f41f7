//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo collection and the five operations the HTTP layer exposes
//! (list, get, create, replace, delete). Nothing here touches the network,
//! so every rule about ids, ordering and not-found handling is testable
//! without a server.
//!
//! # Design
//! - `TodoStore` is a plain owned value; sharing and locking belong to the
//!   caller.
//! - Lookups are linear scans over an insertion-ordered `Vec`.
//! - DTOs derive `ToSchema` so the server can publish them in its OpenAPI
//!   document without redefining them.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{seed_items, IdPolicy, ParseIdPolicyError, TodoStore};
pub use types::{DeleteConfirmation, TodoId, TodoInput, TodoItem};
