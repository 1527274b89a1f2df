//! New Todo Form Component
//!
//! Text input plus Add button for creating tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_task();
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || ctx.state.with(|s| s.new_task.clone())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.set_new_task(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
