//! Browser transport for the session request layer.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! the bearer token only exists in the browser.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use session::{ApiError, ApiRequest, ApiResponse, ApiResult, Transport};

/// `fetch`-backed [`Transport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .header("Accept", "application/json");
            if let Some(authorization) = request.authorization.as_deref() {
                builder = builder.header("Authorization", authorization);
            }

            let resp = match request.body.as_ref() {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
