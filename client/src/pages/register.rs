//! Registration page. A successful registration signs the viewer in and the
//! session controller moves them to the dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::pages::login::auth_error_message;
use crate::state::auth::{AuthSession, AuthState};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub(crate) fn validate_register_input(email: &str, name: &str, password: &str) -> Result<Registration, &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || name.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(Registration { email: email.to_owned(), name: name.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let registration = match validate_register_input(&email.get(), &name.get(), &password.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        let session = session.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Registration { email, name, password } = registration;
            if let Err(e) = session.register(&email, &name, &password).await {
                if let Some(message) = auth_error_message(&e) {
                    info.set(message);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, registration);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="name"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
