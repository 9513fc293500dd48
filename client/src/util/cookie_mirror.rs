//! Session cookie mirror for the edge request inspector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge inspector runs before page delivery and cannot see
//! `localStorage`, so the token is copied into a plain (non-`HttpOnly`)
//! cookie. The cookie is a copy, never a second owner: it is only written
//! and cleared through `TokenSinks`.

#[cfg(test)]
#[path = "cookie_mirror_test.rs"]
mod cookie_mirror_test;

use std::sync::{Mutex, PoisonError};

use crate::util::token_store::TOKEN_KEY;

/// Cookie name the edge inspector looks for.
pub const SESSION_COOKIE_NAME: &str = TOKEN_KEY;

/// A secondary copy of the session token.
pub trait TokenMirror: Send + Sync {
    /// Copy `token` into the mirror.
    fn mirror(&self, token: &str);
    /// Remove the copy.
    fn clear(&self);
}

/// `document.cookie` assignment that sets the session cookie.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE_NAME}={token}; path=/; Secure; SameSite=Lax")
}

/// `document.cookie` assignment that expires the session cookie.
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}=; path=/; Max-Age=0; Secure; SameSite=Lax")
}

/// Extract the session token from a `Cookie`-style header value.
pub fn read_session_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Mirror that writes through `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieMirror;

impl DocumentCookieMirror {
    #[cfg(feature = "hydrate")]
    fn write(line: &str) {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() {
            let _ = html.set_cookie(line);
        }
    }

    /// Session token as currently visible in `document.cookie`.
    pub fn current() -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window().and_then(|w| w.document())?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            let header = html.cookie().ok()?;
            read_session_cookie(&header).map(str::to_owned)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl TokenMirror for DocumentCookieMirror {
    fn mirror(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        Self::write(&session_cookie(token));
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        Self::write(&expired_session_cookie());
    }
}

/// In-process cookie mirror; remembers the last assignment it would have made.
#[derive(Debug, Default)]
pub struct MemoryCookieMirror {
    last: Mutex<Option<String>>,
}

impl MemoryCookieMirror {
    /// Last cookie assignment written, set or expire.
    pub fn last_written(&self) -> Option<String> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Token the mirrored cookie currently carries.
    pub fn value(&self) -> Option<String> {
        let line = self.last_written()?;
        let (pair, _) = line.split_once(';')?;
        read_session_cookie(pair).map(str::to_owned)
    }

    fn record(&self, line: String) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(line);
    }
}

impl TokenMirror for MemoryCookieMirror {
    fn mirror(&self, token: &str) {
        self.record(session_cookie(token));
    }

    fn clear(&self) {
        self.record(expired_session_cookie());
    }
}
