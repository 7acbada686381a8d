//! Generation endpoint handlers.

use crate::dto::{
    BackgroundGenerateRequest, BackgroundGenerateResponse, GenerateRequest, GenerateResponse,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

/// POST /api/generate/detail-page - render (and optionally rasterize) a
/// detail page for a completed session
pub async fn generate_detail_page(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let record = state
        .generation
        .generate(
            &request.session_id,
            request.output_format,
            request.template_id.as_deref(),
        )
        .await
        .map_err(|e| ApiError::from(e).with_context("생성 실패"))?;

    let image_url = record
        .image_path
        .as_ref()
        .map(|_| format!("/api/generate/images/{}", record.id));

    Ok(Json(GenerateResponse {
        preview_url: format!("/api/generate/preview/{}", record.id),
        id: record.id,
        html_content: record.html_content,
        image_url,
    }))
}

/// GET /api/generate/images/{history_id} - download the rasterized page
pub async fn get_generated_image(
    State(state): State<AppState>,
    Path(history_id): Path<String>,
) -> Result<Response, ApiError> {
    let path = state.generation.image_file(&history_id).await?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::from(pagecraft_core::PagecraftError::from(e)))?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"detail_page_{history_id}.png\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// GET /api/generate/preview/{history_id} - stored HTML of a past
/// generation
pub async fn preview(
    State(state): State<AppState>,
    Path(history_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let html = state.generation.preview_html(&history_id).await?;
    Ok(Html(html))
}

/// POST /api/generate/background-image - standalone background image
pub async fn generate_background(
    State(state): State<AppState>,
    Json(request): Json<BackgroundGenerateRequest>,
) -> Result<Json<BackgroundGenerateResponse>, ApiError> {
    let image_url = state
        .generation
        .generate_background(
            request.category,
            request.mood,
            request.color_scheme.as_deref(),
            request.custom_prompt.as_deref(),
        )
        .await
        .map_err(|e| ApiError::from(e).with_context("이미지 생성 실패"))?;

    Ok(Json(BackgroundGenerateResponse { image_url }))
}
