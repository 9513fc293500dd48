//! Auth-session state and the controller that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthSession`] is constructed once at the root of the UI tree and handed
//! down via context. It performs login/register/logout, persists the token
//! through the single `TokenSinks` fan-out, and publishes [`AuthState`] for
//! route guards and user-aware components.
//!
//! CONCURRENCY
//! ===========
//! Every login, register, and logout takes a new session version. A login or
//! register that completes after a newer one started applies nothing and
//! returns [`AuthError::Superseded`], so the stored token, the cookie mirror,
//! and `user` always describe the same credential.
//!
//! Within one call the order is fixed: token store, then cookie mirror, then
//! `user`. Anything reacting to `user` can read the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::{GetUntracked, RwSignal, Set};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::RequestError;
use crate::net::transport::Method;
use crate::net::types::{LoginRequest, RegisterRequest, TokenResponse, UserIdentity};
use crate::util::navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator};
use crate::util::token_claims::{TokenClaims, now_secs};
use crate::util::token_store::TokenSinks;

pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";
pub const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";

/// Authentication state tracking the current user and loading status.
///
/// `loading = true` means "unknown": no redirect decision may be made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

/// Where the controller publishes [`AuthState`].
pub trait AuthStateCell: Send + Sync {
    fn snapshot(&self) -> AuthState;
    fn replace(&self, next: AuthState);
}

impl AuthStateCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn replace(&self, next: AuthState) {
        self.set(next);
    }
}

/// Plain state cell for non-reactive hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryAuthState(Mutex<AuthState>);

impl AuthStateCell for MemoryAuthState {
    fn snapshot(&self) -> AuthState {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn replace(&self, next: AuthState) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The exchange failed; `message` is what the UI shows.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        cause: RequestError,
    },
    /// A newer login, register, or logout started before this one finished.
    #[error("superseded by a newer session change")]
    Superseded,
}

/// Session controller. Cheap to clone; clones share all state.
#[derive(Clone)]
pub struct AuthSession {
    client: ApiClient,
    sinks: TokenSinks,
    navigator: Arc<dyn Navigator>,
    state: Arc<dyn AuthStateCell>,
    version: Arc<AtomicU64>,
    restore_on_startup: bool,
}

impl AuthSession {
    pub fn new(
        config: &ClientConfig,
        client: ApiClient,
        sinks: TokenSinks,
        navigator: Arc<dyn Navigator>,
        state: Arc<dyn AuthStateCell>,
    ) -> Self {
        Self {
            client,
            sinks,
            navigator,
            state,
            version: Arc::new(AtomicU64::new(0)),
            restore_on_startup: config.restore_session_on_startup,
        }
    }

    /// Browser wiring: `localStorage` + cookie sinks, `fetch` transport.
    pub fn browser(config: &ClientConfig, navigator: Arc<dyn Navigator>, state: RwSignal<AuthState>) -> Self {
        let sinks = TokenSinks::browser();
        let client = ApiClient::browser(config, sinks.store());
        Self::new(config, client, sinks, navigator, Arc::new(state))
    }

    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    /// Request client sharing this session's token store.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::clone(&self.navigator)
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let mut next = self.state.snapshot();
        f(&mut next);
        self.state.replace(next);
    }

    /// Settle the initial loading state.
    ///
    /// Unless startup restore is enabled, the stored token is not inspected
    /// and the viewer must log in again.
    pub fn init(&self) {
        let restored = if self.restore_on_startup { self.restore_identity() } else { None };
        if let Some(user) = &restored {
            leptos::logging::log!("restored session for {}", user.email);
        }
        self.update(|s| {
            s.loading = false;
            if restored.is_some() {
                s.user = restored;
            }
        });
    }

    fn restore_identity(&self) -> Option<UserIdentity> {
        let token = self.sinks.current()?;
        let claims = TokenClaims::decode(&token)?;
        if !claims.is_live(now_secs()) {
            return None;
        }
        let user = claims.identity()?;
        // Re-sync mirrors from the owning store.
        self.sinks.persist(&token);
        Some(user)
    }

    fn begin(&self) -> u64 {
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        version
    }

    fn is_current(&self, version: u64) -> bool {
        self.version.load(Ordering::SeqCst) == version
    }

    async fn exchange<B: Serialize>(&self, path: &str, body: &B) -> Result<TokenResponse, RequestError> {
        self.client.post(path, Some(body)).await
    }

    fn complete(
        &self,
        version: u64,
        result: Result<TokenResponse, RequestError>,
        user: UserIdentity,
        fallback: &str,
    ) -> Result<(), AuthError> {
        if !self.is_current(version) {
            leptos::logging::warn!("discarding stale auth response for {}", user.email);
            return Err(AuthError::Superseded);
        }
        match result {
            Ok(token) => {
                self.sinks.persist(&token.access_token);
                self.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                    s.error = None;
                });
                Ok(())
            }
            Err(cause) => {
                let message = cause.backend_message().unwrap_or(fallback).to_owned();
                self.update(|s| {
                    s.loading = false;
                    s.error = Some(message.clone());
                });
                Err(AuthError::Failed { message, cause })
            }
        }
    }

    /// `POST /auth/login`; on success `user.name` is the email's local part.
    ///
    /// # Errors
    ///
    /// `Failed` with the backend's message (or "Login failed"), or
    /// `Superseded` when a newer session change started meanwhile.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let version = self.begin();
        let result = self.exchange("/auth/login", &LoginRequest { email, password }).await;
        self.complete(version, result, UserIdentity::from_email(email), LOGIN_FALLBACK_MESSAGE)
    }

    /// `POST /auth/register`; on success navigates to the dashboard.
    ///
    /// # Errors
    ///
    /// `Failed` with the backend's message (or "Registration failed"), or
    /// `Superseded` when a newer session change started meanwhile.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        let version = self.begin();
        let result = self
            .exchange("/auth/register", &RegisterRequest { email, name, password })
            .await;
        self.complete(version, result, UserIdentity::new(email, name), REGISTER_FALLBACK_MESSAGE)?;
        self.navigator.replace(DASHBOARD_PATH);
        Ok(())
    }

    /// Clear every token sink, forget the user, and go to the login screen.
    pub fn logout(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
        self.sinks.clear();
        self.state.replace(AuthState { user: None, loading: false, error: None });
        self.navigator.replace(LOGIN_PATH);
    }

    /// Log out locally, then tell the backend with the token that was active.
    ///
    /// The local [`logout`] happens before the first await, so a slow or
    /// unreachable backend never keeps the session alive. The backend call is
    /// best-effort and skipped when no token was stored.
    ///
    /// [`logout`]: AuthSession::logout
    pub async fn sign_out(&self) {
        let token = self.sinks.current().filter(|t| !t.is_empty());
        self.logout();
        let Some(token) = token else {
            return;
        };
        let bearer = format!("Bearer {token}");
        let result = self
            .client
            .request::<(), serde_json::Value>(Method::Post, "/auth/logout", None, &[("Authorization", &bearer)])
            .await;
        if let Err(e) = result {
            leptos::logging::warn!("backend logout failed: {e}");
        }
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("client", &self.client)
            .field("sinks", &self.sinks)
            .field("version", &self.version.load(Ordering::SeqCst))
            .field("restore_on_startup", &self.restore_on_startup)
            .finish_non_exhaustive()
    }
}
