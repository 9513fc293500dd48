//! Login page: email + password against the backend's credential exchange.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::{AuthError, AuthSession, AuthState};
#[cfg(feature = "hydrate")]
use crate::util::navigation::DASHBOARD_PATH;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message to show for a failed session change; `None` when a newer attempt
/// owns the outcome.
pub(crate) fn auth_error_message(err: &AuthError) -> Option<String> {
    match err {
        AuthError::Failed { message, .. } => Some(message.clone()),
        AuthError::Superseded => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        let session = session.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(()) => session.navigator().replace(DASHBOARD_PATH),
                Err(e) => {
                    if let Some(message) = auth_error_message(&e) {
                        info.set(message);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
