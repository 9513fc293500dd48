//! Paged, filterable todo list.
//!
//! DESIGN
//! ======
//! The list reloads whenever the query window or the refresh sequence in
//! `TodosState` changes. Responses for a superseded query or refresh are dropped so a
//! slow page never overwrites a newer one.

use leptos::prelude::*;

use crate::components::todo_item::TodoItem;
use crate::net::todo_api::TodoApi;
use crate::net::types::StatusFilter;
use crate::state::todos::TodosState;

#[component]
pub fn TodoList() -> impl IntoView {
    let api = expect_context::<TodoApi>();
    let todos = expect_context::<RwSignal<TodosState>>();

    let window = Memo::new(move |_| todos.with(TodosState::window));

    Effect::new(move || {
        let current = window.get();
        todos.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list(current.0).await;
                if !todos.with_untracked(|s| s.is_current(current)) {
                    return;
                }
                match result {
                    Ok(page) => todos.update(|s| s.apply_page(page)),
                    Err(e) => todos.update(|s| s.apply_error(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, current);
    });

    let on_filter = move |ev: leptos::ev::Event| {
        let status = StatusFilter::from_label(&event_target_value(&ev));
        todos.update(|s| s.query = s.query.with_status(status));
    };
    let on_prev = move |_| todos.update(|s| s.query = s.query.prev_page());
    let on_next = move |_| todos.update(|s| s.query = s.query.next_page());

    let has_prev = move || todos.with(|s| s.query.has_prev());
    let has_next = move || todos.with(|s| s.query.has_next(s.total));
    let page_label = move || todos.with(|s| format!("Page {} of {} tasks", s.query.page_number(), s.total));

    view! {
        <section class="todo-list">
            <header class="todo-list__header">
                <h2>"Your Tasks"</h2>
                <select class="todo-list__filter" on:change=on_filter>
                    {[StatusFilter::All, StatusFilter::Incomplete, StatusFilter::Completed]
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.label() selected=move || todos.with(|s| s.query.status == f)>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Show when=move || todos.with(|s| s.error.is_some())>
                <p class="form-error">{move || todos.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            {move || {
                let state = todos.get();
                if state.loading && state.todos.is_empty() {
                    return view! { <p class="todo-list__empty">"Loading tasks..."</p> }.into_any();
                }
                if state.todos.is_empty() {
                    return view! { <p class="todo-list__empty">"No tasks yet."</p> }.into_any();
                }
                view! {
                    <ul class="todo-list__items">
                        {state.todos.into_iter().map(|todo| view! { <TodoItem todo/> }).collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}

            <footer class="todo-list__pager">
                <button class="btn" on:click=on_prev disabled=move || !has_prev()>"Previous"</button>
                <span>{page_label}</span>
                <button class="btn" on:click=on_next disabled=move || !has_next()>"Next"</button>
            </footer>
        </section>
    }
}
