//! Reference analysis endpoint handlers.

use crate::dto::{AnalysisResponse, AnalyzeRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

/// POST /api/analyze/reference - capture and analyze a competitor page
pub async fn analyze_reference(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let analysis = state
        .analysis
        .analyze(&request.url)
        .await
        .map_err(|e| ApiError::from(e).with_context("분석 실패"))?;

    Ok(Json(analysis.into()))
}
