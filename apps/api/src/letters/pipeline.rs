//! Request orchestration: save uploads → extract → generate → store letter.
//!
//! One request runs start to finish; any failure aborts it and no partial
//! letter is stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extract;
use crate::generation::letter::generate_letter;
use crate::letters::upload::LetterUpload;
use crate::models::cv::CvRecord;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLetter {
    pub letter_id: Uuid,
    pub filename: String,
    pub letter: String,
    pub cv: CvRecord,
    pub generated_at: DateTime<Utc>,
}

pub async fn compose_letter(
    state: &AppState,
    upload: LetterUpload,
) -> Result<GeneratedLetter, AppError> {
    let letter_id = Uuid::new_v4();
    info!(%letter_id, "Composing cover letter");

    state
        .store
        .save_upload(letter_id, &upload.cv.file_name, &upload.cv.bytes)
        .await?;
    state
        .store
        .save_upload(
            letter_id,
            &upload.job_description.file_name,
            &upload.job_description.bytes,
        )
        .await?;

    let cv_text = upload.cv.text()?;
    let job_description = upload.job_description.text()?;

    let cv = extract(&cv_text, state.recognizer.as_ref()).await?;
    info!(%letter_id, "CV fields extracted");

    let letter = generate_letter(&cv, &job_description, state.generator.as_ref()).await?;
    let filename = state.store.save_letter(letter_id, &letter).await?;
    info!(%letter_id, "Cover letter stored as {filename}");

    Ok(GeneratedLetter {
        letter_id,
        filename,
        letter,
        cv,
        generated_at: Utc::now(),
    })
}
