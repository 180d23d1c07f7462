use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which named-entity recognizer extracts the candidate's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerBackend {
    /// Pure-Rust capitalised-line heuristic. No model call.
    Heuristic,
    /// Ask the Ollama model for entities.
    Llm,
}

impl FromStr for NerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(NerBackend::Heuristic),
            "llm" => Ok(NerBackend::Llm),
            other => Err(anyhow!(
                "unknown NER backend '{other}' (expected 'heuristic' or 'llm')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `quill` starts against a local Ollama.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_url: String,
    pub upload_dir: PathBuf,
    pub download_dir: PathBuf,
    pub ner_backend: NerBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            ollama_url: var("OLLAMA_URL", "http://localhost:11434"),
            upload_dir: PathBuf::from(var("UPLOAD_DIR", "uploads")),
            download_dir: PathBuf::from(var("DOWNLOAD_DIR", "downloads")),
            ner_backend: var("NER_BACKEND", "heuristic")
                .parse()
                .context("NER_BACKEND is invalid")?,
        })
    }
}
