use std::sync::Arc;

use crate::extraction::recognizer::EntityRecognizer;
use crate::letters::storage::LetterStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: LetterStore,
    /// Pluggable NER backend. Default: HeuristicRecognizer. Swap via NER_BACKEND env.
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub generator: Arc<dyn TextGenerator>,
}
