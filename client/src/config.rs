//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the API base
//! URL and the session-restore policy are baked in via `option_env!` when the
//! crate is compiled. Both have safe defaults for local development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `TODO_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Typed client configuration shared by the request client and session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    /// When `true`, a stored, unexpired token restores `user` on startup.
    pub restore_session_on_startup: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            restore_session_on_startup: false,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `TODO_API_BASE_URL`: backend base URL (default `http://127.0.0.1:8000`)
    /// - `TODO_RESTORE_SESSION`: `1/true/yes/on` or `0/false/no/off` (default off)
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE_URL"), option_env!("TODO_RESTORE_SESSION"))
    }

    pub(crate) fn from_values(base_url: Option<&str>, restore: Option<&str>) -> Self {
        let api_base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL));
        let restore_session_on_startup = restore.and_then(parse_bool).unwrap_or(false);
        Self { api_base_url, restore_session_on_startup }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a boolean flag value. Unrecognized values yield `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
