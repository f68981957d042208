use axum::http::Method;
use clap::Parser;
use reqwest::Client;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod upstream;

use config::{Args, ChatConfig};
use routes::AppState;
use upstream::UpstreamClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match ChatConfig::resolve(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("chat_proxy: {err}");
            std::process::exit(2);
        }
    };
    if config.api_key.is_none() {
        warn!("CHAT_API_KEY is not set; upstream requests will be sent without credentials");
    }

    let addr = config.addr;
    info!(
        model = %config.model,
        upstream = %config.base_url,
        timeout = ?config.timeout,
        retries = config.max_retries,
        "chat proxy configured"
    );
    let state = AppState {
        upstream: UpstreamClient::new(Client::new(), config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("chat proxy listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind chat proxy address");
    axum::serve(listener, app)
        .await
        .expect("chat proxy server error");
}
