// ABOUTME: HTTP layer for Fincrew providing the web form dispatcher
// ABOUTME: Integration layer that wires the registry, normalizer and completion client

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use fincrew_agents::AgentRegistry;
use fincrew_ai::CompletionClient;
use fincrew_ingest::InputNormalizer;

pub mod form;
pub mod handlers;
pub mod pipeline;

// Request body size limit: 10MB, enough for form uploads
const MAX_REQUEST_SIZE: usize = 10_485_760;

/// Read-only shared state; no request shares mutable data with another.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AgentRegistry>,
    pub normalizer: Arc<InputNormalizer>,
    pub client: Arc<CompletionClient>,
}

impl AppState {
    pub fn new(
        registry: AgentRegistry,
        normalizer: InputNormalizer,
        client: CompletionClient,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            normalizer: Arc::new(normalizer),
            client: Arc::new(client),
        }
    }
}

/// Creates the form dispatcher router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::render_form).post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_SIZE))
        .with_state(state)
}
