//! HTTP handlers for the BookAI service.

use crate::dtos::{CoverRequest, CoverResponse, EbookRequest, EbookResponse, StatusResponse};
use crate::error::ApiError;
use crate::services::prompt::{build_ebook_prompt, extract_cover_prompt};
use crate::startup::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Status check. 503 while the API client could not be initialised.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    if state.text_provider.is_some() {
        (
            StatusCode::OK,
            Json(StatusResponse {
                status: "Servidor BookAI online, API Gemini ativa".to_string(),
                message: "A API está ativa. Use a rota /generate_ebook com método POST."
                    .to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusResponse {
                status: "Servidor BookAI online, API Gemini inoperante".to_string(),
                message: "Verifique se a GEMINI_API_KEY está configurada no ambiente.".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        )
    }
}

/// Generate the full ebook content plus a standalone cover description.
pub async fn generate_ebook(
    State(state): State<AppState>,
    Json(req): Json<EbookRequest>,
) -> Result<Json<EbookResponse>, ApiError> {
    let provider = state
        .text_provider
        .as_ref()
        .ok_or(ApiError::ClientUnavailable)?;

    let prompt = build_ebook_prompt(&req);

    tracing::info!(
        title = %req.title,
        pages = req.pages,
        genre = %req.genre,
        "Generating ebook content"
    );

    let ai_response_text = provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Ebook generation failed");
        ApiError::from(e)
    })?;

    // Best-effort: a reply that ignores the structural contract still counts.
    let cover_prompt = extract_cover_prompt(&ai_response_text).unwrap_or_default();

    Ok(Json(EbookResponse {
        success: true,
        ai_response_text,
        cover_prompt,
    }))
}

/// Generate a cover image and return it as a base64 data URL.
pub async fn generate_cover(
    State(state): State<AppState>,
    Json(req): Json<CoverRequest>,
) -> Result<Json<CoverResponse>, ApiError> {
    let provider = state
        .image_provider
        .as_ref()
        .ok_or(ApiError::ClientUnavailable)?;

    let prompt = req.cover_prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest(
            "Prompt da capa ausente.".to_string(),
        ));
    }

    tracing::info!(prompt_len = prompt.len(), "Generating cover image");

    let payload = provider.generate(prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Cover generation failed");
        ApiError::from(e)
    })?;

    Ok(Json(CoverResponse {
        success: true,
        image_url: format!("data:image/jpeg;base64,{}", payload),
    }))
}
