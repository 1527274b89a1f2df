//! Todo Frontend App
//!
//! Root component: owns the shared state and triggers the initial fetch.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::controller::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(TodoState::default());
    let ctx = AppContext::new(state);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <div class="app">
            <h1>"Todo App"</h1>

            <NewTodoForm />

            <TodoList />

            <p class="todo-count">
                {move || format!("{} tasks", state.with(|s| s.todos.len()))}
            </p>
        </div>
    }
}
