// ABOUTME: Hosts the web form dispatcher over axum
// ABOUTME: CORS and request tracing layers, localhost bind

use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use fincrew_agents::AgentRegistry;
use fincrew_ai::CompletionClient;
use fincrew_api::{create_router, AppState};
use fincrew_ingest::InputNormalizer;

use crate::config::Config;

pub async fn run(port_override: Option<u16>) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let port = port_override.unwrap_or(config.port);

    let registry = AgentRegistry::new()?;
    let normalizer = InputNormalizer::from_env()?;
    let client = CompletionClient::from_env();
    let state = AppState::new(registry, normalizer, client);

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    println!("🚀 Starting Fincrew server...");
    println!("🔗 CORS origin: {}", config.cors_origin);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("✅ Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
