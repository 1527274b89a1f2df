//! Application Context
//!
//! Shared state provided via Leptos Context API, plus fire-and-forget
//! dispatchers that run controller operations against the live service.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpTodoApi, API_URL};
use crate::controller::{TodoController, TodoState};

/// App-wide handle: the shared client state and the remote API binding.
///
/// Each dispatcher snapshots the state, runs the controller operation to
/// completion, and writes back only the fields the operation changed, so a
/// slow response does not clobber input the user typed in the meantime.
/// Overlapping operations on the same field are still last-write-wins.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<TodoState>,
    api: StoredValue<HttpTodoApi>,
}

/// Apply the fields an operation changed (`before` -> `after`) onto the
/// current state, leaving fields the operation never touched as they are.
fn merge_outcome(current: &mut TodoState, before: &TodoState, after: TodoState) {
    if after.todos != before.todos {
        current.todos = after.todos;
    }
    if after.new_task != before.new_task {
        current.new_task = after.new_task;
    }
    if after.editing != before.editing {
        current.editing = after.editing;
    }
}

impl AppContext {
    pub fn new(state: RwSignal<TodoState>) -> Self {
        Self {
            state,
            api: StoredValue::new(HttpTodoApi::new(API_URL)),
        }
    }

    fn controller(&self) -> TodoController<HttpTodoApi> {
        TodoController::new(self.api.get_value())
    }

    fn dispatch<Fut>(
        &self,
        op: impl FnOnce(TodoController<HttpTodoApi>, TodoState) -> Fut + 'static,
    ) where
        Fut: Future<Output = TodoState> + 'static,
    {
        let (state, ctrl) = (self.state, self.controller());
        spawn_local(async move {
            let before = state.get_untracked();
            let after = op(ctrl, before.clone()).await;
            state.update(|current| merge_outcome(current, &before, after));
        });
    }

    /// Reload the whole list from the service
    pub fn refresh(&self) {
        self.dispatch(|ctrl, mut s| async move {
            ctrl.refresh(&mut s).await;
            s
        });
    }

    /// Create a task from the new-task buffer
    pub fn add_task(&self) {
        self.dispatch(|ctrl, mut s| async move {
            ctrl.add_task(&mut s).await;
            s
        });
    }

    /// Delete a task by identifier
    pub fn remove_task(&self, id: String) {
        self.dispatch(move |ctrl, mut s| async move {
            ctrl.remove_task(&mut s, &id).await;
            s
        });
    }

    /// Flip a task's completion flag
    pub fn toggle_task(&self, id: String) {
        self.dispatch(move |ctrl, mut s| async move {
            ctrl.toggle_task(&mut s, &id).await;
            s
        });
    }

    /// Start editing a task (local only)
    pub fn begin_edit(&self, id: String, current: String) {
        let ctrl = self.controller();
        self.state.update(|s| ctrl.begin_edit(s, &id, &current));
    }

    /// Send the active edit draft to the service
    pub fn save_edit(&self) {
        self.dispatch(|ctrl, mut s| async move {
            ctrl.save_edit(&mut s).await;
            s
        });
    }

    /// Mirror the new-task input into the scratch buffer
    pub fn set_new_task(&self, text: String) {
        self.state.update(|s| s.new_task = text);
    }

    /// Mirror the edit input into the active draft, if any
    pub fn set_edit_text(&self, text: String) {
        self.state.update(|s| {
            if let Some(draft) = s.editing.as_mut() {
                draft.text = text;
            }
        });
    }
}
