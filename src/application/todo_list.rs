use crate::domain::clock::Clock;
use crate::domain::error::ValidationError;
use crate::domain::todo::{ListState, TodoId, TodoItem};
use crate::infrastructure::clock::SystemClock;

use super::view::TodoView;

/// One input event the list component consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    DraftChanged(String),
    Submit,
    Complete(TodoId),
    Edit(TodoId),
    Delete(TodoId),
    DragStart(usize),
    DragOver(usize),
    DragEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(TodoId),
    Edited(TodoId),
}

/// The todo list controller. Owns the [`ListState`] and is the only thing
/// that mutates it.
#[derive(Debug)]
pub struct TodoList<C: Clock = SystemClock> {
    clock: C,
    state: ListState,
    last_id: Option<TodoId>,
    focus_pending: bool,
}

impl Default for TodoList<SystemClock> {
    fn default() -> Self { Self::new(SystemClock) }
}

impl<C: Clock> TodoList<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, state: ListState::default(), last_id: None, focus_pending: true }
    }

    pub fn state(&self) -> &ListState { &self.state }

    pub fn clock(&self) -> &C { &self.clock }

    /// True once, right after mount: the host should focus the input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    pub fn view(&self) -> TodoView { TodoView::build(&self.state, self.clock.now()) }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::DraftChanged(text) => self.set_draft(text),
            Action::Submit => { let _ = self.submit_draft(); }
            Action::Complete(id) => { self.toggle_complete(id); }
            Action::Edit(id) => { self.begin_edit(id); }
            Action::Delete(id) => { self.delete_item(id); }
            Action::DragStart(index) => self.drag_start(index),
            Action::DragOver(index) => self.drag_over(index),
            Action::DragEnd => self.drag_end(),
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
        self.state.error = None;
    }

    pub fn submit_draft(&mut self) -> Result<SubmitOutcome, ValidationError> {
        match self.try_submit() {
            Ok(outcome) => {
                self.state.draft.clear();
                self.state.error = None;
                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(error = %err, draft = %self.state.draft, "submit rejected");
                self.state.error = Some(err);
                Err(err)
            }
        }
    }

    fn try_submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        let text = self.state.draft.trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        let editing = self.state.editing;
        let duplicate = self
            .state
            .items
            .iter()
            .any(|t| Some(t.id) != editing && t.same_text(&text));
        if duplicate {
            return Err(ValidationError::Duplicate);
        }

        if let Some(id) = editing {
            if let Some(item) = self.state.items.iter_mut().find(|t| t.id == id) {
                item.text = text;
            }
            self.state.editing = None;
            tracing::info!(%id, "todo edited");
            return Ok(SubmitOutcome::Edited(id));
        }

        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis());
        self.state.items.push(TodoItem::new(id, text, now));
        tracing::info!(%id, count = self.state.items.len(), "todo added");
        Ok(SubmitOutcome::Added(id))
    }

    fn next_id(&mut self, now_ms: i64) -> TodoId {
        let id = match self.last_id {
            Some(TodoId(last)) if last >= now_ms => TodoId(last + 1),
            _ => TodoId(now_ms),
        };
        self.last_id = Some(id);
        id
    }

    pub fn delete_item(&mut self, id: TodoId) -> bool {
        let Some(pos) = self.state.position(id) else { return false };
        self.state.items.remove(pos);
        self.state.drag_source = None;
        if self.state.editing == Some(id) {
            self.state.editing = None;
            self.state.draft.clear();
        }
        tracing::info!(%id, "todo deleted");
        true
    }

    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        let Some(item) = self.state.items.iter_mut().find(|t| t.id == id) else { return false };
        item.done = !item.done;
        tracing::debug!(%id, done = item.done, "todo toggled");
        true
    }

    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(item) = self.state.get(id) else { return false };
        self.state.draft = item.text.clone();
        self.state.editing = Some(id);
        true
    }

    pub fn drag_start(&mut self, index: usize) {
        if index < self.state.items.len() {
            self.state.drag_source = Some(index);
        }
    }

    /// Moves the dragged item to `index` right away and keeps tracking it there.
    pub fn drag_over(&mut self, index: usize) {
        let Some(from) = self.state.drag_source else { return };
        if from == index || index >= self.state.items.len() {
            return;
        }
        let item = self.state.items.remove(from);
        self.state.items.insert(index, item);
        self.state.drag_source = Some(index);
        tracing::debug!(from, to = index, "todo moved");
    }

    pub fn drag_end(&mut self) { self.state.drag_source = None; }
}
