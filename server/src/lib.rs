//! HTTP front end for the todo store.
//!
//! Separated from `main.rs` so the router can be driven in-process by tests
//! without binding a socket.

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;

pub use config::Config;
pub use error::{ApiError, ErrorBody};

/// The store as shared between handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::replace_todo)
                .delete(handlers::delete_todo),
        )
        .route(openapi::DOC_PATH, get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(RwLock::new(store)))
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
