//! Single todo row with completion toggle and delete.

use leptos::prelude::*;

use crate::net::todo_api::TodoApi;
use crate::net::types::Todo;
use crate::state::todos::TodosState;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let api = expect_context::<TodoApi>();
    let todos = expect_context::<RwSignal<TodosState>>();
    let busy = RwSignal::new(false);

    let id = todo.id.clone();
    let completed = todo.completed;
    let on_toggle = {
        let api = api.clone();
        let id = id.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let id = id.clone();

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api.set_completed(&id, !completed).await {
                    Ok(updated) => todos.update(|s| s.replace(updated)),
                    Err(e) => todos.update(|s| s.error = Some(e.to_string())),
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (api, id, todos);
                busy.set(false);
            }
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let id = id.clone();

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api.delete(&id).await {
                    Ok(()) => todos.update(|s| s.remove(&id)),
                    Err(e) => todos.update(|s| s.error = Some(e.to_string())),
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (api, id, todos);
                busy.set(false);
            }
        }
    };

    let href = format!("/todos/{id}");
    let class = if completed { "todo-item todo-item--done" } else { "todo-item" };

    view! {
        <li class=class>
            <input type="checkbox" prop:checked=completed on:change=on_toggle disabled=move || busy.get()/>
            <a class="todo-item__title" href=href>{todo.title}</a>
            {todo.description.map(|d| view! { <p class="todo-item__description">{d}</p> })}
            <button class="btn btn--danger todo-item__delete" on:click=on_delete disabled=move || busy.get()>
                "Delete"
            </button>
        </li>
    }
}
