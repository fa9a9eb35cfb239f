//! HTTP surface of the orchestrator: the message contract the capture
//! and display clients speak, plus health/stats probes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wordlens_common::{ClientRequest, ClientResponse};

use crate::module::Orchestrator;

pub fn build_router(orchestrator: Arc<Orchestrator>) -> Router {
    // Callers are browser contexts, so cross-origin requests must pass
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/message", post(handle_message))
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

async fn handle_message(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<ClientRequest>,
) -> Json<ClientResponse> {
    Json(orchestrator.handle(request).await)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn stats(State(orchestrator): State<Arc<Orchestrator>>) -> impl IntoResponse {
    let stats = serde_json::json!({
        "status": "running",
        "service": "wordlens-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "history_depth": orchestrator.history_depth().await,
    });
    (StatusCode::OK, Json(stats))
}
