//! Generated OpenAPI description of the todo routes.

use axum::Json;
use todo_core::{DeleteConfirmation, TodoInput, TodoItem};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;

/// Route the document is served from.
pub const DOC_PATH: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "My API TODOS without Database Example",
        version = "1.0",
        description = "CRUD operations for managing TODO items without a database."
    ),
    servers((url = "http://localhost:8080")),
    paths(
        handlers::list_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::replace_todo,
        handlers::delete_todo
    ),
    components(schemas(TodoItem, TodoInput, DeleteConfirmation, ErrorBody)),
    tags((name = "todos", description = "Todo item management"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);

        let collection = &paths["/todos"];
        assert!(collection.get("get").is_some());
        assert!(collection.get("post").is_some());

        let item = &paths["/todos/{id}"];
        for method in ["get", "put", "delete"] {
            assert!(item.get(method).is_some(), "missing {method} /todos/{{id}}");
        }
    }

    #[test]
    fn document_carries_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = doc["components"]["schemas"].as_object().unwrap();
        for name in ["TodoItem", "TodoInput", "DeleteConfirmation", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        assert_eq!(doc["info"]["title"], "My API TODOS without Database Example");
        assert_eq!(doc["info"]["version"], "1.0");
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8080");
    }
}
