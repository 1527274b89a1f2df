//! Todo List Component
//!
//! Renders the cached task list in server order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::AppContext;

/// The task list
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.state.with(|s| s.todos.clone())
                key=|todo| (todo.id.clone(), todo.task.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
