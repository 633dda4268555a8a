//! Host configuration parsed from environment variables.

use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Startup failures of the host process.
#[derive(Debug, Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
    pub proxy_connect_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: REST backend origin, default `http://localhost:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, HostError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| HostError::ConfigParse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;

        Ok(Self {
            port,
            backend_url,
            proxy_timeout_secs: env_parse_u64("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            proxy_connect_timeout_secs: env_parse_u64(
                "PROXY_CONNECT_TIMEOUT_SECS",
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            ),
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, HostError> {
    let url = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(HostError::ConfigParse(format!("BACKEND_URL must be http(s): {url}")))
    }
}
