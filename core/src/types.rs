//! Domain DTOs for the todo API.
//!
//! # Design
//! `TodoItem` is both the stored entity and its wire form. `TodoInput` is the
//! candidate payload for create and replace: every field is optional on the
//! wire and falls back to its zero value, so only a body of the wrong shape is
//! rejected. The `id` carried by a candidate is parsed but never applied.
//!
//! `TodoInput` decodes leniently: keys match case-insensitively (ASCII),
//! a repeated key keeps its last non-null value, `null` leaves a field at its
//! current value and unknown keys are skipped. Wrong value types still fail.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Identifier of a todo item.
pub type TodoId = u64;

/// A single todo item held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TodoItem {
    #[schema(value_type = u64, example = 1)]
    pub id: TodoId,
    #[schema(example = "Buy groceries")]
    pub description: String,
    pub completed: bool,
}

/// Request payload for creating or replacing a todo.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq, ToSchema)]
pub struct TodoInput {
    /// Accepted for symmetry with `TodoItem`; the server assigns ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    pub completed: bool,
}

impl TodoInput {
    pub fn new(description: impl Into<String>, completed: bool) -> Self {
        Self {
            id: None,
            description: description.into(),
            completed,
        }
    }

    /// Materialize the candidate under `id`, discarding any id it carried.
    pub fn into_item(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            description: self.description,
            completed: self.completed,
        }
    }
}

impl<'de> Deserialize<'de> for TodoInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TodoInputVisitor)
    }
}

struct TodoInputVisitor;

impl<'de> Visitor<'de> for TodoInputVisitor {
    type Value = TodoInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a todo object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TodoInput, A::Error> {
        let mut input = TodoInput::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                if let Some(id) = map.next_value::<Option<i64>>()? {
                    input.id = Some(id);
                }
            } else if key.eq_ignore_ascii_case("description") {
                if let Some(description) = map.next_value::<Option<String>>()? {
                    input.description = description;
                }
            } else if key.eq_ignore_ascii_case("completed") {
                if let Some(completed) = map.next_value::<Option<bool>>()? {
                    input.completed = completed;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(input)
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct DeleteConfirmation {
    #[schema(example = "Todo deleted successfully")]
    pub message: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            message: "Todo deleted successfully".to_string(),
        }
    }
}
