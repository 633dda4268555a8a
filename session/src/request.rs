//! Credential-bearing request layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`ApiClient`], which prefixes the API base
//! path, attaches `Authorization: Bearer <token>` while a token is known, and
//! turns non-2xx replies into [`ApiError::Status`]. The wire itself sits
//! behind the [`Transport`] seam so the browser (`gloo-net`) and tests
//! (scripted replies) share one code path.
//!
//! No retries, refresh rotation, or queuing: a rejected credential surfaces
//! to the caller as an ordinary error.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Default path prefix for backend endpoints.
pub const DEFAULT_API_BASE: &str = "/api";

/// HTTP verbs used by the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Complete `Authorization` header value, when a credential is attached.
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Raw HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves an [`ApiRequest`] over the wire.
///
/// Futures are not `Send`: the browser event loop is single-threaded.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no HTTP response was obtained.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}

/// `{ "data": T }` envelope used by most list endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T: Default> DataEnvelope<T> {
    /// The payload, or `T::default()` when the backend sent `null`/nothing.
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// HTTP client that carries the current session credential.
pub struct ApiClient<T> {
    transport: T,
    base: String,
    credential: RefCell<Option<String>>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base(transport, DEFAULT_API_BASE)
    }

    pub fn with_base(transport: T, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { transport, base, credential: RefCell::new(None) }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Attach `token` to every subsequent request.
    pub fn set_token(&self, token: &str) {
        *self.credential.borrow_mut() = Some(token.to_owned());
    }

    /// Stop sending a credential.
    pub fn clear_token(&self) {
        self.credential.borrow_mut().take();
    }

    pub fn has_token(&self) -> bool {
        self.credential.borrow().is_some()
    }

    /// The `Authorization` header value for the current credential.
    pub fn authorization(&self) -> Option<String> {
        self.credential
            .borrow()
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }

    /// Absolute endpoint URL for `path` (with or without a leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`]; also [`ApiError::Decode`] for unexpected bodies.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let resp = self.execute(Method::Get, path, None).await?;
        decode(&resp.body)
    }

    /// `GET` an endpoint that wraps its payload in `{ "data": ... }`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn get_data<R: DeserializeOwned + Default>(&self, path: &str) -> ApiResult<R> {
        let envelope: DataEnvelope<R> = self.get(path).await?;
        Ok(envelope.into_data())
    }

    /// # Errors
    ///
    /// [`ApiError::Encode`] if `body` cannot be serialized, otherwise as [`ApiClient::get`].
    pub async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = self.execute(Method::Post, path, Some(body)).await?;
        decode(&resp.body)
    }

    /// `POST` without a request body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let resp = self.execute(Method::Post, path, None).await?;
        decode(&resp.body)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let resp = self.execute(Method::Delete, path, None).await?;
        decode(&resp.body)
    }

    /// Send a request and reject non-2xx replies.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] from the transport, or [`ApiError::Status`] for a
    /// non-success status code.
    pub async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<ApiResponse> {
        let request = ApiRequest { method, url: self.url(path), authorization: self.authorization(), body };
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }
}

/// Decode a JSON body; an empty body decodes as `null`.
pub(crate) fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}
