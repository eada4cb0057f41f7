//! In-memory, insertion-ordered todo collection.
//!
//! # Design
//! `TodoStore` owns a `Vec<TodoItem>` and answers every lookup with a linear
//! scan on `id`. It performs no I/O and holds no locks; the HTTP layer wraps
//! it in a lock and hands it to handlers as shared state.
//!
//! Ids are assigned by an [`IdPolicy`]. The default, `LenPlusOne`, uses the
//! current collection size plus one. That formula reuses an id still in use
//! once anything has been deleted (delete 3 of 1..=5, then create: the new
//! item gets 5 again). It is kept as the default because clients observe it;
//! `MaxPlusOne` is the collision-free alternative.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::StoreError;
use crate::types::{TodoId, TodoInput, TodoItem};

/// How `TodoStore::create` picks the id of a new item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// `len + 1`. Can collide after a delete.
    #[default]
    LenPlusOne,
    /// `max(id) + 1`, or 1 for an empty collection.
    MaxPlusOne,
}

impl IdPolicy {
    fn next_id(self, items: &[TodoItem]) -> TodoId {
        match self {
            IdPolicy::LenPlusOne => items.len() as TodoId + 1,
            IdPolicy::MaxPlusOne => items.iter().map(|t| t.id).max().unwrap_or(0) + 1,
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::LenPlusOne => f.write_str("len-plus-one"),
            IdPolicy::MaxPlusOne => f.write_str("max-plus-one"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown id policy `{0}` (expected `len-plus-one` or `max-plus-one`)")]
pub struct ParseIdPolicyError(String);

impl FromStr for IdPolicy {
    type Err = ParseIdPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "len-plus-one" => Ok(IdPolicy::LenPlusOne),
            "max-plus-one" => Ok(IdPolicy::MaxPlusOne),
            other => Err(ParseIdPolicyError(other.to_string())),
        }
    }
}

/// The five sample items every fresh store starts with.
pub fn seed_items() -> Vec<TodoItem> {
    [
        (1, "Buy groceries", false),
        (2, "Clean the house", true),
        (3, "Go for a run", false),
        (4, "Study for exams", false),
        (5, "Write a blog post", true),
    ]
    .into_iter()
    .map(|(id, description, completed)| TodoItem {
        id,
        description: description.to_string(),
        completed,
    })
    .collect()
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    id_policy: IdPolicy,
}

impl TodoStore {
    /// An empty store.
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            items: Vec::new(),
            id_policy,
        }
    }

    /// A store holding [`seed_items`].
    pub fn seeded(id_policy: IdPolicy) -> Self {
        Self::with_items(seed_items(), id_policy)
    }

    /// A store holding `items` as given. Ids are not checked for uniqueness.
    pub fn with_items(items: Vec<TodoItem>, id_policy: IdPolicy) -> Self {
        Self { items, id_policy }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: TodoId) -> Result<&TodoItem, StoreError> {
        self.items
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append `input` under a freshly assigned id and return the stored item.
    pub fn create(&mut self, input: TodoInput) -> TodoItem {
        let id = self.id_policy.next_id(&self.items);
        let item = input.into_item(id);
        self.items.push(item.clone());
        item
    }

    /// Overwrite the first item with `id`. The stored id stays `id` whatever
    /// the candidate carries.
    pub fn replace(&mut self, id: TodoId, input: TodoInput) -> Result<TodoItem, StoreError> {
        let pos = self.position(id).ok_or(StoreError::NotFound(id))?;
        let item = input.into_item(id);
        self.items[pos] = item.clone();
        Ok(item)
    }

    /// Remove the first item with `id`, keeping the others in order.
    pub fn delete(&mut self, id: TodoId) -> Result<TodoItem, StoreError> {
        let pos = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(pos))
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}
