//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::chat_api::ChatApi;
use crate::net::todo_api::TodoApi;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    todo_detail::TodoDetailPage,
};
use crate::state::auth::{AuthSession, AuthState};
use crate::state::chat::ChatState;
use crate::state::todos::TodosState;
use crate::util::navigation::{NavigationBridge, RouterNavigator};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single session controller for the tree and provides it, its
/// published auth state, and the resource clients as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let navigator = RouterNavigator::new();
    let session = AuthSession::browser(&config, Arc::new(navigator), auth);

    provide_context(auth);
    provide_context(TodoApi::new(session.client().clone()));
    provide_context(ChatApi::new(session.client().clone()));
    provide_context(RwSignal::new(TodosState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(session.clone());

    // Settle auth once the browser is available; SSR stays at `loading`.
    Effect::new(move || session.init());

    view! {
        <Stylesheet id="leptos" href="/pkg/todo-portal.css"/>
        <Title text="Todo App"/>

        <Router>
            <NavigationBridge navigator/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("todos"), ParamSegment("id")) view=TodoDetailPage/>
            </Routes>
        </Router>
    }
}
