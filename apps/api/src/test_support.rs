//! Fakes for the injected model backends, shared by unit and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::extraction::recognizer::{EntityRecognizer, EntitySpan, HeuristicRecognizer};
use crate::extraction::ExtractionError;
use crate::letters::storage::LetterStore;
use crate::llm_client::{GenerationOptions, LlmError, TextGenerator};
use crate::models::cv::{Contact, CvRecord};
use crate::state::AppState;

pub const SAMPLE_CV: &str = "John Doe\nEducation:\nBSc CS\nExperience:\nEngineer at X\nSkills:\njava, python\njohn@x.com +12345678901";

pub const SAMPLE_JOB_DESCRIPTION: &str = "Looking for a backend engineer.";

/// The record `SAMPLE_CV` extracts to.
pub fn sample_record() -> CvRecord {
    CvRecord {
        name: Some("John Doe".to_string()),
        contact: Contact {
            email: "john@x.com".to_string(),
            phone: "+12345678901".to_string(),
        },
        education: vec!["BSc CS".to_string()],
        experience: vec!["Engineer at X".to_string()],
        skills: vec![
            "java, python".to_string(),
            "john@x.com +12345678901".to_string(),
        ],
    }
}

/// Replies with a fixed text (or fails like an unavailable model) and records every call.
pub struct ScriptedGenerator {
    reply: Option<String>,
    calls: Mutex<Vec<(String, GenerationOptions)>>,
}

impl ScriptedGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options));
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model unavailable".to_string(),
        })
    }
}

/// Returns the same entity list for every document.
pub struct FixedRecognizer(pub Vec<EntitySpan>);

#[async_trait]
impl EntityRecognizer for FixedRecognizer {
    async fn entities(&self, _text: &str) -> Result<Vec<EntitySpan>, ExtractionError> {
        Ok(self.0.clone())
    }
}

/// App state over temporary upload/download directories.
pub async fn test_state(root: &std::path::Path, generator: Arc<ScriptedGenerator>) -> AppState {
    let store = LetterStore::open(root.join("uploads"), root.join("downloads"))
        .await
        .unwrap();
    AppState {
        store,
        recognizer: Arc::new(HeuristicRecognizer),
        generator,
    }
}
