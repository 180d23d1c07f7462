//! Named-entity recognition backends.
//!
//! Default: `HeuristicRecognizer` (pure-Rust, deterministic, no model call).
//! Optional: `LlmRecognizer` (asks the Ollama model for a JSON entity list).
//!
//! `AppState` holds an `Arc<dyn EntityRecognizer>`, chosen at startup via `NER_BACKEND`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::extraction::prompts::ENTITY_PROMPT_TEMPLATE;
use crate::extraction::ExtractionError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_reply, GenerationOptions, TextGenerator};

pub const PERSON_LABEL: &str = "PERSON";

/// A labelled span of text, e.g. `{"text": "Jane Doe", "label": "PERSON"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Entities in document order.
    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicRecognizer
// ────────────────────────────────────────────────────────────────────────────

/// Tags any line made of 2–4 capitalised alphabetic words as a PERSON.
///
/// CVs conventionally open with the candidate's name on its own line, which is
/// the only case this aims to catch. Recognises no other labels.
pub struct HeuristicRecognizer;

#[async_trait]
impl EntityRecognizer for HeuristicRecognizer {
    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractionError> {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| looks_like_person(line))
            .map(|line| EntitySpan {
                text: line.split_whitespace().collect::<Vec<_>>().join(" "),
                label: PERSON_LABEL.to_string(),
            })
            .collect())
    }
}

fn looks_like_person(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len()) && words.iter().all(|word| is_name_word(word))
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase()
        && word.chars().any(char::is_lowercase)
        && chars.all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '.'))
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRecognizer
// ────────────────────────────────────────────────────────────────────────────

const NER_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.0,
    json: true,
};

#[derive(Debug, Deserialize)]
struct EntityList {
    #[serde(default)]
    entities: Vec<EntitySpan>,
}

/// Entity recognition delegated to the text-generation model.
pub struct LlmRecognizer(pub Arc<dyn TextGenerator>);

#[async_trait]
impl EntityRecognizer for LlmRecognizer {
    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractionError> {
        let prompt = fill_template(
            ENTITY_PROMPT_TEMPLATE,
            &[("json_only", JSON_ONLY_INSTRUCTION), ("text", text)],
        );

        let reply = self
            .0
            .generate(&prompt, NER_OPTIONS)
            .await
            .map_err(|e| ExtractionError::Recognizer(format!("entity recognition failed: {e}")))?;

        let list: EntityList = parse_json_reply(&reply).map_err(|e| {
            ExtractionError::Recognizer(format!("entity recognition returned bad JSON: {e}"))
        })?;

        Ok(list.entities)
    }
}
