//! Client-side navigation seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session controller and route guards request navigations without
//! holding router handles. [`RouterNavigator`] parks the target in a signal
//! and [`NavigationBridge`], mounted inside `<Router>`, performs it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";
/// Landing screen for authenticated viewers.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Something that can move the viewer to another screen.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}

/// Navigator that hands targets to [`NavigationBridge`].
#[derive(Clone, Copy, Debug)]
pub struct RouterNavigator {
    pending: RwSignal<Option<String>>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn replace(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }
}

/// Performs navigations parked by a [`RouterNavigator`]. Must render inside
/// `<Router>` so `use_navigate` resolves.
#[component]
pub fn NavigationBridge(navigator: RouterNavigator) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        let Some(path) = navigator.pending.get() else {
            return;
        };
        navigator.pending.update_untracked(|pending| *pending = None);
        navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::{Mutex, PoisonError};

    use super::Navigator;

    /// Navigator that only records where it was asked to go.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingNavigator {
        visits: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub(crate) fn visits(&self) -> Vec<String> {
            self.visits.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, path: &str) {
            self.visits
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(path.to_owned());
        }
    }
}
