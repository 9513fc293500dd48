//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Todo App"</h1>
            <p>"Track your tasks and manage them by chatting with the assistant."</p>
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| view! {
                    <div class="home-page__actions">
                        <a class="btn" href="/login">"Sign In"</a>
                        <a class="btn" href="/register">"Create Account"</a>
                    </div>
                }
            >
                <div class="home-page__actions">
                    <a class="btn" href="/dashboard">"Go to Dashboard"</a>
                </div>
            </Show>
        </div>
    }
}
