//! Cover letter generation.
//!
//! `render_prompt` is pure: identical inputs always give a byte-identical prompt.
//! `generate_letter` sends that prompt once and returns whatever the model says:
//! no retry, no timeout, no post-processing of the reply.

use thiserror::Error;
use tracing::info;

use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, LIST_SEPARATOR, UNKNOWN_NAME};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{GenerationOptions, LlmError, TextGenerator};
use crate::models::cv::CvRecord;

/// Sampling temperature for cover letters.
pub const LETTER_TEMPERATURE: f64 = 0.7;

const LETTER_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: LETTER_TEMPERATURE,
    json: false,
};

#[derive(Debug, Error)]
#[error("cover letter generation failed: {0}")]
pub struct GenerationError(#[from] pub LlmError);

/// Everything the prompt is built from. Lives only for one render.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub record: &'a CvRecord,
    pub job_description: &'a str,
}

impl GenerationRequest<'_> {
    pub fn render_prompt(&self) -> String {
        let record = self.record;
        let education = record.education.join(LIST_SEPARATOR);
        let experience = record.experience.join(LIST_SEPARATOR);
        let skills = record.skills.join(LIST_SEPARATOR);

        fill_template(
            COVER_LETTER_PROMPT_TEMPLATE,
            &[
                ("name", record.name.as_deref().unwrap_or(UNKNOWN_NAME)),
                ("email", record.contact.email.as_str()),
                ("phone", record.contact.phone.as_str()),
                ("education", education.as_str()),
                ("experience", experience.as_str()),
                ("skills", skills.as_str()),
                ("job_description", self.job_description),
            ],
        )
    }
}

pub fn render_prompt(record: &CvRecord, job_description: &str) -> String {
    GenerationRequest {
        record,
        job_description,
    }
    .render_prompt()
}

pub async fn generate_letter(
    record: &CvRecord,
    job_description: &str,
    generator: &dyn TextGenerator,
) -> Result<String, GenerationError> {
    let prompt = render_prompt(record, job_description);
    info!("Requesting cover letter ({} prompt bytes)", prompt.len());

    let letter = generator.generate(&prompt, LETTER_OPTIONS).await?;
    info!("Cover letter generated ({} bytes)", letter.len());

    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::cv::Contact;
    use crate::test_support::{sample_record, ScriptedGenerator, SAMPLE_JOB_DESCRIPTION};

    #[test]
    fn test_render_prompt_is_deterministic() {
        let record = sample_record();
        let first = render_prompt(&record, SAMPLE_JOB_DESCRIPTION);
        let second = render_prompt(&record, SAMPLE_JOB_DESCRIPTION);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_render_prompt_embeds_every_field() {
        let prompt = render_prompt(&sample_record(), SAMPLE_JOB_DESCRIPTION);

        assert!(prompt.contains("Name: John Doe\n"));
        assert!(prompt.contains("Email: john@x.com\n"));
        assert!(prompt.contains("Phone: +12345678901\n"));
        assert!(prompt.contains("Education:\nBSc CS\n"));
        assert!(prompt.contains("Experience:\nEngineer at X\n"));
        assert!(prompt.contains("Skills:\njava, python, john@x.com +12345678901\n"));
        assert!(prompt.contains("Job Description:\nLooking for a backend engineer.\n"));
    }

    #[test]
    fn test_render_prompt_without_name_or_sections() {
        let record = CvRecord {
            name: None,
            contact: Contact {
                email: "a@b.io".to_string(),
                phone: "555 123 4567".to_string(),
            },
            education: vec![],
            experience: vec![],
            skills: vec![],
        };
        let prompt = render_prompt(&record, "Role");
        assert!(prompt.contains("Name: Not provided\n"));
        assert!(prompt.contains("Education:\n\n"));
    }

    #[test]
    fn test_job_description_is_copied_verbatim() {
        let job = "Needs {name} placeholders\n  and   odd spacing\t";
        let prompt = render_prompt(&sample_record(), job);
        assert!(prompt.contains(job));
    }

    #[tokio::test]
    async fn test_generate_letter_passes_model_reply_through() {
        let generator = ScriptedGenerator::replying("  Dear team,\n\nHire me.  ");
        let record = sample_record();

        let letter = generate_letter(&record, SAMPLE_JOB_DESCRIPTION, &generator)
            .await
            .unwrap();
        assert_eq!(letter, "  Dear team,\n\nHire me.  ");

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, render_prompt(&record, SAMPLE_JOB_DESCRIPTION));
        assert_eq!(calls[0].1.temperature, LETTER_TEMPERATURE);
        assert!(!calls[0].1.json);
    }

    #[tokio::test]
    async fn test_generate_letter_wraps_runtime_failure() {
        let generator = ScriptedGenerator::failing();
        let err = generate_letter(&sample_record(), SAMPLE_JOB_DESCRIPTION, &generator)
            .await
            .unwrap_err();
        assert!(matches!(err.0, LlmError::Api { status: 503, .. }));
    }
}
