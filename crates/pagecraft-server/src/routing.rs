//! Axum router configuration for all endpoints.

use crate::handlers::{analyze, generate, interview, status, templates};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service banner and health endpoints
        .route("/", get(status::root))
        .route("/health", get(status::health_check))
        // Interview endpoints
        .route("/api/interview/sessions", post(interview::create_session))
        .route(
            "/api/interview/sessions/{session_id}",
            get(interview::get_session),
        )
        .route(
            "/api/interview/sessions/{session_id}/next-question",
            get(interview::next_question),
        )
        .route(
            "/api/interview/sessions/{session_id}/answer",
            post(interview::submit_answer),
        )
        // Generation endpoints
        .route("/api/generate/detail-page", post(generate::generate_detail_page))
        .route(
            "/api/generate/images/{history_id}",
            get(generate::get_generated_image),
        )
        .route("/api/generate/preview/{history_id}", get(generate::preview))
        .route(
            "/api/generate/background-image",
            post(generate::generate_background),
        )
        // Template registry endpoints
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/api/templates/{template_id}",
            get(templates::get_template).delete(templates::delete_template),
        )
        // Analysis endpoints
        .route("/api/analyze/reference", post(analyze::analyze_reference))
        .with_state(state)
}
