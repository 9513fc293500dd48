//! Authenticated landing route: task list plus the assistant panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::todo_form::TodoForm;
use crate::components::todo_list::TodoList;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Tasks,
    Assistant,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Assistant => "Assistant",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Tasks => Self::Assistant,
            Self::Assistant => Self::Tasks,
        }
    }
}

pub(crate) fn greeting(auth: &AuthState) -> String {
    match &auth.user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardContent/>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(DashboardTab::default());

    let tab_button = move |target: DashboardTab| {
        view! {
            <button
                class="dashboard-tab"
                class:dashboard-tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-header">
                <h1>{move || greeting(&auth.get())}</h1>
                <div class="dashboard-tabs">
                    {tab_button(DashboardTab::Tasks)}
                    {tab_button(DashboardTab::Assistant)}
                </div>
            </header>
            <main class="dashboard-main">
                <Show
                    when=move || tab.get() == DashboardTab::Tasks
                    fallback=|| view! { <ChatPanel/> }
                >
                    <TodoForm/>
                    <TodoList/>
                </Show>
            </main>
        </div>
    }
}
