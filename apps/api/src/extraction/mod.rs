//! Field Extractor: turns raw CV text into a `CvRecord`.
//!
//! Email and phone are mandatory: a CV without either aborts the request.
//! Education, experience and skills are optional: a missing header yields an
//! empty list. The asymmetry is deliberate and covered by tests.

pub mod patterns;
pub mod prompts;
pub mod recognizer;
pub mod sections;

use thiserror::Error;
use tracing::debug;

use crate::extraction::patterns::{first_email, first_phone};
use crate::extraction::recognizer::{EntityRecognizer, PERSON_LABEL};
use crate::extraction::sections::split_sections;
use crate::models::cv::{Contact, CvRecord};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no {0} found in CV")]
    MissingField(&'static str),

    #[error("{0}")]
    Recognizer(String),
}

pub async fn extract(
    cv_text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<CvRecord, ExtractionError> {
    let name = recognizer
        .entities(cv_text)
        .await?
        .into_iter()
        .find(|entity| entity.label == PERSON_LABEL)
        .map(|entity| entity.text);

    let email = first_email(cv_text).ok_or(ExtractionError::MissingField("email"))?;
    let phone = first_phone(cv_text).ok_or(ExtractionError::MissingField("phone"))?;

    let sections = split_sections(cv_text);
    debug!(
        "Extracted CV fields: name_found={}, education={}, experience={}, skills={}",
        name.is_some(),
        sections.education.len(),
        sections.experience.len(),
        sections.skills.len()
    );

    Ok(CvRecord {
        name,
        contact: Contact {
            email: email.to_string(),
            phone: phone.to_string(),
        },
        education: sections.education,
        experience: sections.experience,
        skills: sections.skills,
    })
}
