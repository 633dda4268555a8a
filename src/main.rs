mod config;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let proxy = proxy::BackendProxy::new(&config).expect("backend proxy init failed");
    let app = routes::app(proxy).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, backend = %config.backend_url, "linkpage listening");
    axum::serve(listener, app).await.expect("server failed");
}
