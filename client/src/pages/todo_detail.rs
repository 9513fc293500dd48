//! Single todo view with inline editing.

#[cfg(test)]
#[path = "todo_detail_test.rs"]
mod todo_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::todo_api::TodoApi;
use crate::net::types::{Todo, TodoUpdate};
use crate::state::todos::TodosState;

/// Fields that differ from `original`, or `None` when nothing changed.
pub(crate) fn edit_changes(
    original: &Todo,
    title: &str,
    description: &str,
    completed: bool,
) -> Result<Option<TodoUpdate>, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    let description = description.trim();
    let mut update = TodoUpdate::default();
    if title != original.title {
        update.title = Some(title.to_owned());
    }
    if description != original.description.as_deref().unwrap_or_default() {
        update.description = Some(description.to_owned());
    }
    if completed != original.completed {
        update.completed = Some(completed);
    }
    if update == TodoUpdate::default() { Ok(None) } else { Ok(Some(update)) }
}

#[component]
pub fn TodoDetailPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <TodoDetailContent/>
        </ProtectedRoute>
    }
}

#[component]
fn TodoDetailContent() -> impl IntoView {
    let api = expect_context::<TodoApi>();
    let todos = expect_context::<RwSignal<TodosState>>();
    let params = use_params_map();
    let todo_id = move || params.read().get("id").unwrap_or_default();

    let todo = RwSignal::new(None::<Todo>);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let completed = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_api = api.clone();
    Effect::new(move || {
        let id = todo_id();
        if id.is_empty() {
            return;
        }
        let api = load_api.clone();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get(&id).await {
                Ok(loaded) => {
                    title.set(loaded.title.clone());
                    description.set(loaded.description.clone().unwrap_or_default());
                    completed.set(loaded.completed);
                    todo.set(Some(loaded));
                    info.set(String::new());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, id);
            busy.set(false);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(original) = todo.get() else {
            return;
        };
        let changes = match edit_changes(&original, &title.get(), &description.get(), completed.get()) {
            Ok(Some(changes)) => changes,
            Ok(None) => {
                info.set("No changes to save.".to_owned());
                return;
            }
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = api.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.update(&original.id, &changes).await {
                Ok(updated) => {
                    todos.update(|s| s.replace(updated.clone()));
                    todo.set(Some(updated));
                    info.set("Saved.".to_owned());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, changes, todos);
            busy.set(false);
        }
    };

    view! {
        <div class="todo-detail-page">
            <NavBar/>
            <a class="todo-detail__back" href="/dashboard">"Back to dashboard"</a>
            <Show
                when=move || todo.get().is_some()
                fallback=move || view! {
                    <p class="todo-detail__loading">
                        {move || if busy.get() { "Loading...".to_owned() } else { info.get() }}
                    </p>
                }
            >
                <form class="todo-detail__form" on:submit=on_submit.clone()>
                    <input
                        class="todo-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="todo-form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <label class="todo-detail__completed">
                        <input
                            type="checkbox"
                            prop:checked=move || completed.get()
                            on:change=move |ev| completed.set(event_target_checked(&ev))
                        />
                        "Completed"
                    </label>
                    <button class="btn" type="submit" disabled=move || busy.get()>"Save"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="todo-detail__message">{move || info.get()}</p>
                </Show>
            </Show>
        </div>
    }
}
