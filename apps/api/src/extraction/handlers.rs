//! Axum route handlers for the profile extraction API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::models::Extraction;
use crate::extraction::pdf::extract_pdf_text;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extraction_id: Uuid,
    #[serde(flatten)]
    pub extraction: Extraction,
}

impl From<Extraction> for ExtractResponse {
    fn from(extraction: Extraction) -> Self {
        Self {
            extraction_id: Uuid::new_v4(),
            extraction,
        }
    }
}

/// POST /api/v1/profiles/extract
///
/// Extracts a profile from text that was already decoded upstream.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let extractor = state.extractor.clone();
    let extraction = tokio::task::spawn_blocking(move || extractor.extract(&request.raw_text))
        .await
        .map_err(anyhow::Error::from)??;

    let response = ExtractResponse::from(extraction);
    info!(
        "Text extraction {} finished with status {:?}",
        response.extraction_id, response.extraction.status
    );
    Ok(Json(response))
}

/// POST /api/v1/profiles/extract/pdf
///
/// Accepts a multipart upload with a `file` field holding a PDF, decodes it
/// and extracts a profile.
pub async fn handle_extract_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let pdf = read_upload(&mut multipart).await?;

    let extractor = state.extractor.clone();
    let extraction = tokio::task::spawn_blocking(move || -> Result<Extraction, AppError> {
        let text = extract_pdf_text(&pdf)?;
        Ok(extractor.extract(&text)?)
    })
    .await
    .map_err(anyhow::Error::from)??;

    let response = ExtractResponse::from(extraction);
    info!(
        "PDF extraction {} finished with status {:?}",
        response.extraction_id, response.extraction.status
    );
    Ok(Json(response))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")));
        }
    }
    Err(AppError::Validation(format!(
        "Multipart body has no '{UPLOAD_FIELD}' field"
    )))
}
