//! Backend API relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser issues relative `/api/...` calls. The host owns that prefix
//! and relays each request to the REST backend unchanged, so the client only
//! ever talks to one origin.
//!
//! Failures never surface as host errors: an unreachable or misbehaving
//! backend becomes `502 Bad Gateway` with a `{ "message": ... }` body the
//! client already knows how to display.

use std::time::Duration;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::{HostConfig, HostError};

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

/// Largest request body relayed to the backend.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not cross the relay.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Clone, Debug)]
pub struct BackendProxy {
    http: reqwest::Client,
    base_url: String,
}

impl BackendProxy {
    pub fn new(config: &HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(config.proxy_connect_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HostError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.backend_url.clone() })
    }
}

/// Join the backend origin with the incoming path and query.
pub fn target_url(base_url: &str, path_and_query: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path_and_query.trim_start_matches('/'))
}

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy every end-to-end header.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Axum handler for `/api/{*path}`.
pub async fn forward(State(proxy): State<BackendProxy>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = target_url(&proxy.base_url, path_and_query);
    let method = parts.method;

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "request body rejected");
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
        }
    };

    let upstream = match proxy
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            return error_response(StatusCode::BAD_GATEWAY, "Backend unavailable");
        }
    };

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "relayed");
            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            *response.headers_mut() = headers;
            response
        }
        Err(e) => {
            tracing::warn!(%method, %url, status = status.as_u16(), error = %e, "backend body read failed");
            error_response(StatusCode::BAD_GATEWAY, "Backend unavailable")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}
