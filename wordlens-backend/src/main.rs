use std::sync::Arc;

use anyhow::Result;
use wordlens_backend::config::BackendConfig;
use wordlens_backend::module::Orchestrator;
use wordlens_backend::{logging, service};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BackendConfig::load()?;

    let _logging_guard = logging::init_logging("logs", "wordlens-backend", &config.log_level);

    tracing::info!("WordLens backend starting...");
    tracing::info!("Server will listen on {}", config.server_address());

    let orchestrator = Arc::new(Orchestrator::new(&config));
    let app = service::build_router(orchestrator);

    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
    tracing::info!("Message endpoint ready at http://{}/message", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
