//! Axum route handlers for the experience API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::experience::generator::generate_experience;
use crate::experience::validation::{validate_record, FieldViolation};
use crate::models::experience::{GeneratedExperience, FALLBACK_DOWNLOAD_FILENAME};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: GeneratedExperience,
}

/// Shared pipeline for both endpoints. Validation runs before the credential
/// check and before any upstream call.
async fn run_pipeline(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<GeneratedExperience, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::Validation(vec![FieldViolation::body(rejection.body_text())])
    })?;

    let record = validate_record(&body).map_err(AppError::Validation)?;

    generate_experience(&state.config, state.llm.as_ref(), record).await
}

/// POST /api/generate
///
/// Validates the fourteen-field record and returns the generated summary
/// alongside the record's identifying fields.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let data = run_pipeline(&state, payload).await?;

    Ok(Json(GenerateResponse {
        success: true,
        data,
    }))
}

/// POST /api/generate/export
///
/// Same pipeline, answered as a plain-text attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let data = run_pipeline(&state, payload).await?;

    // Non-ASCII titles fall back to a generic name rather than RFC 5987 encoding.
    let filename = Some(data.download_filename())
        .filter(|name| name.is_ascii())
        .unwrap_or_else(|| FALLBACK_DOWNLOAD_FILENAME.to_string());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data.to_plain_text(),
    )
        .into_response())
}
