mod config;
mod errors;
mod extraction;
mod generation;
mod letters;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, NerBackend};
use crate::extraction::recognizer::{EntityRecognizer, HeuristicRecognizer, LlmRecognizer};
use crate::letters::storage::LetterStore;
use crate::llm_client::{OllamaClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quill v{}", env!("CARGO_PKG_VERSION"));

    // Model runtime, built once and shared by every request
    let ollama = OllamaClient::new(config.ollama_url.clone())?;
    info!(
        "Ollama client initialized (model: {}, url: {})",
        llm_client::MODEL,
        ollama.base_url()
    );
    let generator: Arc<dyn TextGenerator> = Arc::new(ollama);

    let recognizer: Arc<dyn EntityRecognizer> = match config.ner_backend {
        NerBackend::Heuristic => Arc::new(HeuristicRecognizer),
        NerBackend::Llm => Arc::new(LlmRecognizer(generator.clone())),
    };
    info!("NER backend: {:?}", config.ner_backend);

    let store = LetterStore::open(&config.upload_dir, &config.download_dir).await?;

    let state = AppState {
        store,
        recognizer,
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
