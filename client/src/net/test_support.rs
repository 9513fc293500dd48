//! Scripted transport shared by client tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(message.to_owned()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_owned()))
    }
}
