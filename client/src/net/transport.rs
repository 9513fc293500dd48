//! HTTP exchange seam beneath the request client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the browser transport reports itself unavailable, since
//! the backend is only reached from the browser tab holding the token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange. `Err` means no response was obtained.
///
/// Futures are `!Send`: browser fetch promises live on the UI thread.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Body of a received response. A failed read means no usable response.
pub(crate) fn response_body<E: std::fmt::Display>(text: Result<String, E>) -> Result<String, String> {
    text.map_err(|e| format!("failed to read response body: {e}"))
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outbound = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| e.to_string())?;

            let resp = outbound.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let text = if status == 204 { Ok(String::new()) } else { resp.text().await };
            let body = response_body(text)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}
