//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens apply identical unauthenticated redirect behavior: a
//! neutral placeholder while auth is loading, one navigation to `/login` once
//! it settles without a user, the real content otherwise.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::navigation::{LOGIN_PATH, Navigator};

/// What a protected screen should show for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Auth still loading; no decision yet.
    Placeholder,
    /// Settled without a user; placeholder while the redirect happens.
    Redirect,
    Content,
}

pub fn guard_view(state: &AuthState) -> GuardView {
    if state.loading {
        GuardView::Placeholder
    } else if state.user.is_none() {
        GuardView::Redirect
    } else {
        GuardView::Content
    }
}

/// Issues at most one login redirect per unauthenticated settle.
///
/// Re-armed only after a user has been seen, so effect re-runs or a failed
/// navigation never produce a redirect loop.
#[derive(Debug, Default)]
pub struct RouteGuard {
    fired: AtomicBool,
}

impl RouteGuard {
    /// Evaluate `state`, navigating through `navigator` when a redirect is due.
    pub fn evaluate(&self, state: &AuthState, navigator: &dyn Navigator) -> GuardView {
        let view = guard_view(state);
        match view {
            GuardView::Redirect => {
                if !self.fired.swap(true, Ordering::SeqCst) {
                    navigator.replace(LOGIN_PATH);
                }
            }
            GuardView::Content => self.fired.store(false, Ordering::SeqCst),
            GuardView::Placeholder => {}
        }
        view
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect(auth: RwSignal<AuthState>, navigator: Arc<dyn Navigator>) -> RwSignal<GuardView> {
    let guard = Arc::new(RouteGuard::default());
    let view = RwSignal::new(guard_view(&auth.get_untracked()));
    Effect::new(move || {
        let state = auth.get();
        view.set(guard.evaluate(&state, navigator.as_ref()));
    });
    view
}
