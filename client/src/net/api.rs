//! Authenticated request client for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call (auth, todos, chat) goes through [`ApiClient`]. It
//! resolves the base URL, attaches the stored token as a bearer credential,
//! serializes JSON bodies, and normalizes failures into [`RequestError`].
//!
//! ERROR HANDLING
//! ==============
//! A missing token is not an error here; the backend decides. Non-success
//! statuses are decoded into `ApiError`, 204 yields an empty result, and
//! nothing is retried, cached, or deduplicated.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, RequestError};
use super::transport::{BrowserTransport, HttpRequest, HttpTransport, Method};
use crate::config::ClientConfig;
use crate::util::token_store::TokenStore;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Shared request client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), tokens, transport }
    }

    /// Browser wiring: configured base URL over `fetch`.
    pub fn browser(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self::new(&config.api_base_url, tokens, Arc::new(BrowserTransport))
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Currently stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Stored token, or `Unauthorized` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Unauthorized` when no token is stored.
    pub fn require_token(&self) -> Result<String, RequestError> {
        self.token()
            .filter(|t| !t.is_empty())
            .ok_or(RequestError::Unauthorized)
    }

    /// Build the outbound request: defaults first, caller headers override by
    /// case-insensitive name.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> HttpRequest {
        let mut merged = vec![("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned())];
        if let Some(token) = self.token() {
            merged.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        for (name, value) in headers {
            merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            merged.push(((*name).to_owned(), (*value).to_owned()));
        }
        HttpRequest { method, url: self.url(path), headers: merged, body }
    }

    /// Send a request and decode the JSON response into `T`.
    ///
    /// 204 (or an empty success body) decodes as JSON `null`, so `()` and
    /// `Option<_>` targets receive an empty result.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrives, `Api` for non-success statuses,
    /// `Decode` when a success body does not match `T`.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| RequestError::Decode(e.to_string()))?;
        let request = self.build_request(method, path, body, headers);

        let resp = self
            .transport
            .send(request)
            .await
            .map_err(RequestError::Transport)?;

        if !resp.is_success() {
            let err = ApiError::from_response(resp.status, &resp.body);
            leptos::logging::warn!("{} {path} failed: status={} message={err}", method.as_str(), resp.status);
            return Err(err.into());
        }

        let value = if resp.status == 204 || resp.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&resp.body).map_err(|e| RequestError::Decode(e.to_string()))?
        };
        serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request::<(), T>(Method::Get, path, None, &[]).await
    }

    /// `POST path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Post, path, body, &[]).await
    }

    /// `PUT path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Put, path, body, &[]).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request::<(), T>(Method::Delete, path, None, &[]).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}
