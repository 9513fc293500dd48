//! Profile page: signed-in identity and session details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::UserIdentity;
use crate::state::auth::AuthState;
use crate::util::cookie_mirror::DocumentCookieMirror;

/// Label/value rows shown for an identity.
pub(crate) fn identity_rows(user: &UserIdentity) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", user.name.clone()), ("Email", user.email.clone())];
    if let Some(id) = &user.id {
        rows.push(("User ID", id.clone()));
    }
    rows
}

pub(crate) fn cookie_status(present: bool) -> &'static str {
    if present { "Session cookie present" } else { "Session cookie missing" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <ProfileContent/>
        </ProtectedRoute>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cookie_present = DocumentCookieMirror::current().is_some();

    let rows = move || {
        auth.get()
            .user
            .map(|user| identity_rows(&user))
            .unwrap_or_default()
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="profile-row">
                        <span class="profile-row__label">{label}</span>
                        <span class="profile-row__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="profile-page">
            <NavBar/>
            <div class="profile-card">
                <h1>"Profile"</h1>
                {rows}
                <p class="profile-card__session">{cookie_status(cookie_present)}</p>
            </div>
        </div>
    }
}
