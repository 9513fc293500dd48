//! Create-todo form.

#[cfg(test)]
#[path = "todo_form_test.rs"]
mod todo_form_test;

use leptos::prelude::*;

use crate::net::todo_api::TodoApi;
use crate::net::types::TodoCreate;
use crate::state::todos::TodosState;

/// Trim form input into a create payload. Title is mandatory; a blank
/// description is omitted.
pub(crate) fn validate_new_todo(title: &str, description: &str) -> Result<TodoCreate, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    let description = description.trim();
    Ok(TodoCreate {
        title: title.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        completed: None,
    })
}

#[component]
pub fn TodoForm() -> impl IntoView {
    let api = expect_context::<TodoApi>();
    let todos = expect_context::<RwSignal<TodosState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_new_todo(&title.get(), &description.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let api = api.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.create(&payload).await {
                Ok(_) => {
                    title.set(String::new());
                    description.set(String::new());
                    todos.update(TodosState::refresh);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, payload, todos);
            busy.set(false);
        }
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                class="todo-form__title"
                type="text"
                placeholder="What needs doing?"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="todo-form__description"
                placeholder="Details (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Add Task"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
