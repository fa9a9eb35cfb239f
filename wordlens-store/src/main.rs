use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use wordlens_common::TranslationRecord;

mod config;
mod db;

use config::Config;
use db::TranslationStore;

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Stats endpoint - returns basic server information
async fn stats() -> impl IntoResponse {
    let stats = serde_json::json!({
        "status": "running",
        "service": "wordlens-store",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(stats))
}

fn parse_record(body: Value) -> Result<TranslationRecord, serde_json::Error> {
    serde_json::from_value(body)
}

/// Persist one translation event
async fn store_translation(
    State(store): State<Arc<TranslationStore>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let record = match parse_record(body) {
        Ok(record) => record,
        Err(e) => {
            warn!("Rejected translation record: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing required fields" })),
            );
        }
    };

    match store.insert(record).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Data saved successfully" })),
        ),
        Err(e) => {
            error!("Error inserting data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Error inserting data into MongoDB" })),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    // Build the store handle and test the connection once at startup;
    // the server still comes up when the database is down, requests
    // will answer 500 until it returns.
    let store = Arc::new(TranslationStore::connect(&config).await?);
    match store.ping().await {
        Ok(()) => info!("Successfully connected to MongoDB"),
        Err(e) => error!("MongoDB connection failed: {}", e),
    }

    // Setup CORS if enabled
    let cors = if config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    // Build the application routes
    let app = Router::new()
        .route("/store-translation", post(store_translation))
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store);

    let addr = config.server_address();
    info!("Starting store server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record_accepts_complete_body() {
        let body = json!({
            "originalWord": "hola",
            "translatedWord": "hello",
            "pexelsImages": [],
            "date": "2026-08-06T12:00:00Z",
            "language": "es",
        });
        let record = parse_record(body).unwrap();
        assert_eq!(record.original_word, "hola");
        assert_eq!(record.language, "es");
    }

    #[test]
    fn test_parse_record_rejects_missing_fields() {
        let body = json!({
            "originalWord": "hola",
            "translatedWord": "hello",
        });
        assert!(parse_record(body).is_err());
    }
}
