//! Top navigation bar with the signed-in identity and logout action.

use leptos::prelude::*;

use crate::state::auth::{AuthSession, AuthState};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AuthSession>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = session.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.sign_out().await;
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            session.logout();
            busy.set(false);
        }
    };

    let display_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/dashboard">"Todo App"</a>
            <Show when=move || auth.get().user.is_some()>
                <div class="nav-bar__links">
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/profile">"Profile"</a>
                </div>
                <span class="nav-bar__user">{display_name}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() disabled=move || busy.get()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
