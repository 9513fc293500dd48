//! Persisted session-token slot and the fan-out that keeps its mirrors in step.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser tab's `localStorage` owns the token. Everything else that needs
//! a copy (the session cookie read by the edge inspector) is a mirror. Writes
//! and clears go through [`TokenSinks`] so the owner and every mirror change
//! together, owner first.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. Outside a browsing context (SSR, tests,
//! non-`hydrate` builds) the browser store reads `None` and skips writes.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::util::cookie_mirror::TokenMirror;

/// Fixed `localStorage` key for the session token.
pub const TOKEN_KEY: &str = "todo_app_token";

/// Key-value slot holding the current session token.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn get(&self) -> Option<String>;
    /// Replace the stored token. No shape validation is performed.
    fn set(&self, token: &str);
    /// Drop the stored token.
    fn remove(&self);
}

/// Token store backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-process token store for non-browser hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Single entry point for persisting or clearing the session token.
///
/// The owning store is always written before any mirror, and clearing walks
/// the same sinks in the same order.
#[derive(Clone)]
pub struct TokenSinks {
    store: Arc<dyn TokenStore>,
    mirrors: Vec<Arc<dyn TokenMirror>>,
}

impl TokenSinks {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store, mirrors: Vec::new() }
    }

    /// Add a mirror that receives every persist/clear after the store.
    #[must_use]
    pub fn with_mirror(mut self, mirror: Arc<dyn TokenMirror>) -> Self {
        self.mirrors.push(mirror);
        self
    }

    /// Browser wiring: `localStorage` owner plus the session cookie mirror.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalTokenStore))
            .with_mirror(Arc::new(crate::util::cookie_mirror::DocumentCookieMirror))
    }

    /// Owning store, shared with the request client for bearer lookup.
    pub fn store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// Token currently held by the owning store.
    pub fn current(&self) -> Option<String> {
        self.store.get()
    }

    /// Write `token` to the store, then to every mirror.
    pub fn persist(&self, token: &str) {
        self.store.set(token);
        for mirror in &self.mirrors {
            mirror.mirror(token);
        }
    }

    /// Remove the token from the store, then from every mirror.
    pub fn clear(&self) {
        self.store.remove();
        for mirror in &self.mirrors {
            mirror.clear();
        }
    }
}

impl std::fmt::Debug for TokenSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSinks")
            .field("has_token", &self.store.get().is_some())
            .field("mirrors", &self.mirrors.len())
            .finish()
    }
}
