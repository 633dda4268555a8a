//! Scripted transport for driving the session layer in tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::error::{ApiError, ApiResult};
use crate::request::{ApiRequest, ApiResponse, Transport};

/// Replays queued replies in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(self, reason: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(reason.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Holds its first request until the paired sender fires, then answers from
/// the wrapped script.
pub(crate) struct GatedTransport {
    inner: ScriptedTransport,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl GatedTransport {
    pub(crate) fn new(inner: ScriptedTransport) -> (Self, oneshot::Sender<()>) {
        let (open, gate) = oneshot::channel();
        (Self { inner, gate: RefCell::new(Some(gate)) }, open)
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.send(request).await
    }
}

pub(crate) const ANA: &str = r#"{"id":1,"name":"Ana","email":"ana@example.com","role":"user","is_active":true}"#;
