//! LLM Client: the single point of entry for all Ollama calls in Quill.
//!
//! ARCHITECTURAL RULE: No other module may talk to the model runtime directly.
//! The letter generator and the LLM entity recognizer both go through `TextGenerator`.
//!
//! Model: llama2 (hardcoded, not configurable)

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// The model used for all generation calls in Quill.
pub const MODEL: &str = "llama2";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model runtime error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sampling knobs for a single call. The model itself is fixed to [`MODEL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f64,
    /// Ask the runtime to constrain output to a JSON document.
    pub json: bool,
}

/// Anything that turns a prompt into generated text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>` so tests can swap in a fake.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
pub struct OllamaResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub prompt_eval_count: Option<u32>,
    pub eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// Client for a local Ollama runtime (`POST /api/generate`, non-streaming).
///
/// No timeout and no retries: a call blocks until the runtime answers or the
/// connection fails.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        let request_body = OllamaRequest {
            model: MODEL,
            prompt,
            stream: false,
            format: options.json.then_some("json"),
            options: OllamaOptions {
                temperature: options.temperature,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: OllamaResponse = response.json().await?;

        debug!(
            "Ollama call finished: done={}, prompt_tokens={:?}, output_tokens={:?}",
            reply.done, reply.prompt_eval_count, reply.eval_count
        );

        Ok(reply.response)
    }
}

/// Deserializes a model reply that was asked to be JSON.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let inner = inner.trim_start();
    inner
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(inner)
}
