//! Client-side route guard wrapper for protected screens.

use leptos::prelude::*;

use crate::state::auth::{AuthSession, AuthState};
use crate::util::auth::{GuardView, install_unauth_redirect};

/// Renders `children` only once auth has settled with a user present.
///
/// While loading a neutral placeholder is shown; when settled without a user
/// one navigation to `/login` is issued and the placeholder stays up until
/// the router moves on.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AuthSession>();
    let guard = install_unauth_redirect(auth, session.navigator());

    move || match guard.get() {
        GuardView::Content => children().into_any(),
        GuardView::Placeholder => view! { <div class="guard-placeholder">"Loading..."</div> }.into_any(),
        GuardView::Redirect => view! { <div class="guard-placeholder">"Redirecting..."</div> }.into_any(),
    }
}
