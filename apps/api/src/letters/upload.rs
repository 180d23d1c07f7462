//! Multipart upload handling for the CV + job description form.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub const CV_FIELD: &str = "cv_file";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description_file";

const PDF_MAGIC: &[u8] = b"%PDF";

/// One uploaded file, kept in memory for the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedDocument {
    /// Plain text of the document. PDFs are converted; anything else must be UTF-8.
    pub fn text(&self) -> Result<String, AppError> {
        if self.bytes.starts_with(PDF_MAGIC) {
            return pdf_extract::extract_text_from_mem(&self.bytes).map_err(|e| {
                AppError::Validation(format!("Could not read PDF '{}': {e}", self.file_name))
            });
        }

        String::from_utf8(self.bytes.to_vec()).map_err(|_| {
            AppError::Validation(format!(
                "'{}' is not a UTF-8 text file",
                self.file_name
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct LetterUpload {
    pub cv: UploadedDocument,
    pub job_description: UploadedDocument,
}

/// Reads both form fields. Unknown fields are skipped; a missing one is a validation error.
pub async fn read_letter_upload(mut multipart: Multipart) -> Result<LetterUpload, AppError> {
    let mut cv = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let slot = match field.name() {
            Some(CV_FIELD) => &mut cv,
            Some(JOB_DESCRIPTION_FIELD) => &mut job_description,
            other => {
                debug!("Ignoring unexpected form field {:?}", other);
                continue;
            }
        };

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        *slot = Some(UploadedDocument { file_name, bytes });
    }

    match (cv, job_description) {
        (Some(cv), Some(job_description)) => Ok(LetterUpload {
            cv,
            job_description,
        }),
        _ => Err(AppError::Validation(
            "Please upload both CV and Job Description files.".to_string(),
        )),
    }
}
