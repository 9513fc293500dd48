//! Best-effort decoding of the session token's payload.
//!
//! The client treats the token as opaque except for the optional JWT payload
//! segment, which may carry an expiry and identity claims. Nothing here
//! verifies signatures; the backend remains the authority.

#[cfg(test)]
#[path = "token_claims_test.rs"]
mod token_claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::UserIdentity;

/// Claims the client knows how to read from a JWT payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry as seconds since the Unix epoch.
    pub exp: Option<i64>,
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl TokenClaims {
    /// Decode the payload segment of `token`. Returns `None` for anything that
    /// is not a three-segment token with a base64url JSON payload.
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
        if segments.next().is_some() {
            return None;
        }
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Whether the claims carry an expiry later than `now_secs`.
    pub fn is_live(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp > now_secs)
    }

    /// Identity recoverable from the claims: an `email` claim, or a `sub`
    /// that looks like an email address.
    pub fn identity(&self) -> Option<UserIdentity> {
        let email = self
            .email
            .clone()
            .or_else(|| self.sub.clone().filter(|sub| sub.contains('@')))?;
        let identity = match self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => UserIdentity::new(&email, name),
            None => UserIdentity::from_email(&email),
        };
        Some(identity.with_id(self.sub.clone()))
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
