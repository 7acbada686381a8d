//! Interview endpoint handlers.

use crate::dto::{
    AnswerAck, AnswerRequest, CreateSessionRequest, QuestionResponse, SessionResponse,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

/// POST /api/interview/sessions - start a new interview session
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.interview.create_session(request.reference_url).await?;
    Ok(Json(session.into()))
}

/// GET /api/interview/sessions/{session_id} - fetch a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.interview.get_session(&session_id).await?;
    Ok(Json(session.into()))
}

/// GET /api/interview/sessions/{session_id}/next-question - next question
/// or completion marker
pub async fn next_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let step = state.interview.next_question(&session_id).await?;
    Ok(Json(step.into()))
}

/// POST /api/interview/sessions/{session_id}/answer - submit one answer
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerAck>, ApiError> {
    state
        .interview
        .submit_answer(&session_id, &request.field_name, request.value)
        .await?;
    Ok(Json(AnswerAck {
        success: true,
        field_name: request.field_name,
    }))
}
