//! Render surface: a plain view tree rebuilt from [`ListState`] after every event.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::todo::{ListState, TodoId};

use super::relative_time::distance_in_words;

pub const HEADING: &str = "TODO App";
pub const PLACEHOLDER: &str = "Enter your todo";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitLabel { Add, Edit }

impl SubmitLabel {
    pub fn as_str(self) -> &'static str {
        match self { SubmitLabel::Add => "ADD", SubmitLabel::Edit => "EDIT" }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    pub draft: String,
    pub placeholder: &'static str,
    pub submit_label: SubmitLabel,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemView {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
    /// Time since creation, e.g. "5 minutes".
    pub age: String,
    pub dragging: bool,
}

impl ItemView {
    pub fn caption(&self) -> String { format!("{} ({} ago)", self.text, self.age) }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodoView {
    pub heading: &'static str,
    pub form: FormView,
    pub error: Option<String>,
    pub items: Vec<ItemView>,
}

impl TodoView {
    pub fn build(state: &ListState, now: DateTime<Utc>) -> Self {
        let submit_label = if state.editing_id().is_some() { SubmitLabel::Edit } else { SubmitLabel::Add };
        let items = state
            .items()
            .iter()
            .enumerate()
            .map(|(i, t)| ItemView {
                id: t.id,
                text: t.text.clone(),
                done: t.done,
                age: distance_in_words(t.created_at, now),
                dragging: state.drag_source() == Some(i),
            })
            .collect();
        Self {
            heading: HEADING,
            form: FormView { draft: state.draft().to_string(), placeholder: PLACEHOLDER, submit_label },
            error: state.error().map(|e| e.to_string()),
            items,
        }
    }
}
