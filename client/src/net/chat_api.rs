//! Chat conversation client for the assistant panel.

#[cfg(test)]
#[path = "chat_api_test.rs"]
mod chat_api_test;

use super::api::ApiClient;
use super::error::RequestError;
use super::types::{ChatReply, ChatRequest};

#[derive(Clone, Debug)]
pub struct ChatApi {
    client: ApiClient,
}

impl ChatApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /chat/conversation` with the user's message.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a token, otherwise any request failure.
    pub async fn send(&self, message: &str) -> Result<ChatReply, RequestError> {
        self.client.require_token()?;
        self.client
            .post("/chat/conversation", Some(&ChatRequest { message }))
            .await
    }
}
