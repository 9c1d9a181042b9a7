mod config;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let proxy = proxy::ApiProxy::new(&config).expect("upstream http client init failed");
    let app = routes::leptos_app(&config, proxy).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upstream = %config.upstream_api_url, "weatherdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
