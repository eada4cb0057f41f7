//! Request handlers for the `/todos` routes.
//!
//! Handlers stay thin: take the store lock, call one `TodoStore` operation,
//! and turn the outcome into JSON or an `ApiError`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use todo_core::{DeleteConfirmation, TodoId, TodoInput, TodoItem};
use tracing::debug;

use crate::error::{ApiError, ErrorBody};
use crate::SharedStore;

/// Parse a path id. Anything that is not a non-negative integer becomes 0,
/// an id no item ever carries, so it answers 404 rather than 400.
fn parse_id(raw: &str) -> TodoId {
    raw.parse().unwrap_or(0)
}

/// Decode a create/replace body whatever its content type. Only the first
/// JSON value is read; anything after it is ignored. A `null` body is an
/// all-default candidate, an empty one is malformed.
fn decode_input(body: &[u8]) -> Result<TodoInput, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<TodoInput>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(ApiError::BadRequest),
    }
}

/// List all todos
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses((status = 200, description = "Every todo in insertion order", body = [TodoItem]))
)]
pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<TodoItem>> {
    let todos = store.read().await;
    debug!(count = todos.len(), "listed todos");
    Json(todos.list().to_vec())
}

/// Get a todo by id
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "The matching todo", body = TodoItem),
        (status = 404, description = "No todo has this id", body = ErrorBody)
    )
)]
pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id);
    let todos = store.read().await;
    let todo = todos.get(id)?;
    debug!(id, "fetched todo");
    Ok(Json(todo.clone()))
}

/// Add a new todo
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = TodoInput,
    responses(
        (status = 200, description = "The stored todo with its assigned id", body = TodoItem),
        (status = 400, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<TodoItem>, ApiError> {
    let input = decode_input(&body)?;
    let todo = store.write().await.create(input);
    debug!(id = todo.id, "created todo");
    Ok(Json(todo))
}

/// Replace an existing todo
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo ID")),
    request_body = TodoInput,
    responses(
        (status = 200, description = "The updated todo", body = TodoItem),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "No todo has this id", body = ErrorBody)
    )
)]
pub async fn replace_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id);
    let mut todos = store.write().await;
    // An unknown id wins over a malformed body.
    if !todos.contains(id) {
        return Err(ApiError::NotFound);
    }
    let input = decode_input(&body)?;
    let todo = todos.replace(id, input)?;
    debug!(id, "replaced todo");
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Confirmation message", body = DeleteConfirmation),
        (status = 404, description = "No todo has this id", body = ErrorBody)
    )
)]
pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = parse_id(&id);
    store.write().await.delete(id)?;
    debug!(id, "deleted todo");
    Ok(Json(DeleteConfirmation::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("3"), 3);
        assert_eq!(parse_id("0"), 0);
    }

    #[test]
    fn parse_id_falls_back_to_zero() {
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id("-1"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("99999999999999999999999"), 0);
    }

    #[test]
    fn decode_null_body_is_default() {
        assert_eq!(decode_input(b"null").unwrap(), TodoInput::default());
        assert_eq!(decode_input(b" null\n").unwrap(), TodoInput::default());
    }

    #[test]
    fn decode_ignores_trailing_data() {
        let input = decode_input(br#"{"description":"x"} {"description":"y"}"#).unwrap();
        assert_eq!(input.description, "x");
    }

    #[test]
    fn decode_rejects_empty_and_malformed() {
        assert_eq!(decode_input(b""), Err(ApiError::BadRequest));
        assert_eq!(decode_input(b"   "), Err(ApiError::BadRequest));
        assert_eq!(decode_input(b"{"), Err(ApiError::BadRequest));
        assert_eq!(decode_input(b"42"), Err(ApiError::BadRequest));
        assert_eq!(decode_input(br#"{"completed":1}"#), Err(ApiError::BadRequest));
    }
}
