//! Todo Item Component
//!
//! A single row in the list: label plus per-task controls, or the inline
//! edit form when this task is the active edit target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::Todo;

/// A single task row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = todo.completed;
    let id = todo.id.clone();
    let task = todo.task.clone();

    let is_editing = {
        let id = id.clone();
        move || {
            ctx.state
                .with(|s| s.editing.as_ref().is_some_and(|draft| draft.id == id))
        }
    };

    let toggle_id = id.clone();
    let edit_id = id.clone();
    let edit_task = task.clone();
    let delete_id = id.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            {move || if is_editing() {
                view! {
                    <div class="edit-row">
                        <input
                            type="text"
                            prop:value=move || {
                                ctx.state.with(|s| {
                                    s.editing.as_ref().map(|d| d.text.clone()).unwrap_or_default()
                                })
                            }
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                ctx.set_edit_text(input.value());
                            }
                        />
                        <button on:click=move |_| ctx.save_edit()>"Save"</button>
                    </div>
                }.into_any()
            } else {
                let toggle_id = toggle_id.clone();
                let edit_id = edit_id.clone();
                let edit_task = edit_task.clone();
                let delete_id = delete_id.clone();
                view! {
                    <div class="view-row">
                        <span class=move || {
                            if completed { "todo-text completed" } else { "todo-text" }
                        }>{task.clone()}</span>
                        <div class="todo-actions">
                            <button
                                class="toggle-btn"
                                on:click=move |_| ctx.toggle_task(toggle_id.clone())
                            >
                                {if completed { "Uncomplete" } else { "Complete" }}
                            </button>
                            <button
                                class="edit-btn"
                                on:click=move |_| ctx.begin_edit(edit_id.clone(), edit_task.clone())
                            >
                                "Edit"
                            </button>
                            <button
                                class="delete-btn"
                                on:click=move |_| ctx.remove_task(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                }.into_any()
            }}
        </li>
    }
}
