// Letter Generator: CV record + job description → prompt → model → cover letter.
// All model calls go through llm_client; no direct Ollama HTTP calls here.

pub mod letter;
pub mod prompts;
