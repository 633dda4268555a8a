use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("PROXY_TIMEOUT_SECS");
        std::env::remove_var("PROXY_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.proxy_connect_timeout_secs, DEFAULT_PROXY_CONNECT_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BACKEND_URL", "https://links.example.test/");
        std::env::set_var("PROXY_TIMEOUT_SECS", "12");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://links.example.test");
    assert_eq!(cfg.proxy_timeout_secs, 12);

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = HostConfig::from_env().unwrap_err();
    assert!(matches!(err, HostError::ConfigParse(_)));

    unsafe { clear_host_env() };
}

#[test]
fn unparsable_timeout_falls_back_to_default() {
    unsafe {
        clear_host_env();
        std::env::set_var("PROXY_TIMEOUT_SECS", "soon");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);

    unsafe { clear_host_env() };
}

#[test]
fn backend_url_requires_http_scheme() {
    assert!(parse_backend_url(Some("ftp://example.test")).is_err());
    assert_eq!(parse_backend_url(Some("  ")).unwrap(), DEFAULT_BACKEND_URL);
    assert_eq!(parse_backend_url(None).unwrap(), DEFAULT_BACKEND_URL);
}
