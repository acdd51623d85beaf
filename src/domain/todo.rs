use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Millisecond timestamp taken when the item was created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self { id, text, done: false, created_at }
    }

    /// Case-insensitive text comparison used by the duplicate check.
    pub fn same_text(&self, other: &str) -> bool {
        self.text.to_lowercase() == other.to_lowercase()
    }
}

/// Everything the list component holds between events.
///
/// Fields are only reachable through getters; mutation goes through
/// [`crate::application::todo_list::TodoList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) draft: String,
    pub(crate) editing: Option<TodoId>,
    pub(crate) error: Option<ValidationError>,
    pub(crate) drag_source: Option<usize>,
}

impl ListState {
    pub fn items(&self) -> &[TodoItem] { &self.items }
    pub fn draft(&self) -> &str { &self.draft }
    pub fn editing_id(&self) -> Option<TodoId> { self.editing }
    pub fn error(&self) -> Option<ValidationError> { self.error }
    pub fn drag_source(&self) -> Option<usize> { self.drag_source }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }
}
