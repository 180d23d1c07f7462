//! Axum route handlers for the upload form, the result page and the JSON API.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::extract;
use crate::letters::pages::{index_page, result_page};
use crate::letters::pipeline::{compose_letter, GeneratedLetter};
use crate::letters::upload::read_letter_upload;
use crate::models::cv::CvRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub cv: CvRecord,
}

// ────────────────────────────────────────────────────────────────────────────
// HTML flow
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(index_page())
}

/// POST /
///
/// Runs the full pipeline, then redirects (303) to the result page for the stored letter.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let upload = read_letter_upload(multipart).await?;
    let generated = compose_letter(&state, upload).await?;
    Ok(Redirect::to(&format!(
        "/result?filename={}",
        generated.filename
    )))
}

/// GET /result?filename=
pub async fn handle_result(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> Result<Html<String>, AppError> {
    let letter = read_stored_letter(&state, &query.filename).await?;
    Ok(Html(result_page(&query.filename, &letter)))
}

/// GET /download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let letter = read_stored_letter(&state, &filename).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        letter,
    )
        .into_response())
}

async fn read_stored_letter(state: &AppState, filename: &str) -> Result<String, AppError> {
    state
        .store
        .read_letter(filename)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Letter {filename} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// JSON API
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cover-letters
///
/// Same pipeline as the form, answering with the letter and the extracted CV as JSON.
pub async fn handle_create_letter(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GeneratedLetter>, AppError> {
    let upload = read_letter_upload(multipart).await?;
    let generated = compose_letter(&state, upload).await?;
    Ok(Json(generated))
}

/// POST /api/v1/cv/extract
///
/// Previews field extraction without calling the letter model.
pub async fn handle_extract_preview(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let cv = extract(&request.cv_text, state.recognizer.as_ref()).await?;
    Ok(Json(ExtractResponse { cv }))
}
