//! Task Client Controller
//!
//! Owns the client-side view of the todo list and translates user intents
//! into remote calls. Every remote failure is logged and swallowed; the
//! affected state keeps its previous (possibly stale) value. Nothing here
//! touches the rendering surface, so the whole module is testable against
//! an in-memory [`TodoApi`] implementation.

use log::error;

use crate::api::TodoApi;
use crate::models::Todo;

/// In-flight edit: target identifier plus the unsaved text
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub text: String,
}

/// Client-side state: cached task list plus transient input buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// Cached copy of the server's list, in server order
    pub todos: Vec<Todo>,
    /// Scratch buffer for the "new task" input
    pub new_task: String,
    /// Active edit, if any. Reference and scratch text travel together,
    /// so they are both-present or both-absent by construction.
    pub editing: Option<EditDraft>,
}

/// Mediates between user actions and the remote service
pub struct TodoController<A: TodoApi> {
    api: A,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all tasks and replace the local list wholesale (no merge).
    /// On failure the stale list is kept.
    pub async fn refresh(&self, state: &mut TodoState) {
        match self.api.list().await {
            Ok(todos) => state.todos = todos,
            Err(e) => error!("error fetching todos: {e}"),
        }
    }

    /// Create a task from the new-task buffer and append the server's
    /// returned record. A label that trims to empty is a no-op with no
    /// network call. The buffer is cleared after the call whether or not
    /// it succeeded.
    pub async fn add_task(&self, state: &mut TodoState) {
        if state.new_task.trim().is_empty() {
            return;
        }
        match self.api.create(&state.new_task).await {
            Ok(created) => state.todos.push(created),
            Err(e) => error!("error adding todo: {e}"),
        }
        state.new_task.clear();
    }

    /// Delete by identifier; on success drop the matching record locally
    /// without refetching.
    pub async fn remove_task(&self, state: &mut TodoState, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => state.todos.retain(|todo| todo.id != id),
            Err(e) => error!("error deleting todo: {e}"),
        }
    }

    /// Flip the completion flag server-side. The list is not patched in
    /// place; the new value only shows up through the follow-up refetch.
    pub async fn toggle_task(&self, state: &mut TodoState, id: &str) {
        match self.api.toggle_complete(id).await {
            Ok(()) => self.refresh(state).await,
            Err(e) => error!("error toggling todo: {e}"),
        }
    }

    /// Start editing a task. Purely local, no remote call.
    pub fn begin_edit(&self, state: &mut TodoState, id: &str, current: &str) {
        state.editing = Some(EditDraft {
            id: id.to_string(),
            text: current.to_string(),
        });
    }

    /// Send the active draft to the service. With no draft this is a no-op.
    /// The draft is cleared after the call even when it failed (longstanding
    /// behavior, kept as-is); a successful save is followed by a full
    /// refetch.
    pub async fn save_edit(&self, state: &mut TodoState) {
        let Some(draft) = state.editing.take() else {
            return;
        };
        match self.api.edit(&draft.id, &draft.text).await {
            Ok(()) => self.refresh(state).await,
            Err(e) => error!("error updating todo: {e}"),
        }
    }
}
