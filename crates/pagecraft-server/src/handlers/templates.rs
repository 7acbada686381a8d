//! Template registry endpoint handlers.

use crate::dto::{DeleteAck, TemplateCreateRequest, TemplateListQuery, TemplateResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use pagecraft_core::PagecraftError;
use pagecraft_core::template::Template;

/// GET /api/templates - list templates, optionally filtered by category
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplateListQuery>,
) -> Result<Json<Vec<TemplateResponse>>, ApiError> {
    let templates = state.templates.list(query.category.as_deref()).await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// GET /api/templates/{template_id} - fetch one template
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<TemplateResponse>, ApiError> {
    let template = state
        .templates
        .find_by_id(&template_id)
        .await?
        .ok_or_else(|| PagecraftError::not_found("template", &template_id))?;
    Ok(Json(template.into()))
}

/// POST /api/templates - create a template
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateCreateRequest>,
) -> Result<Json<TemplateResponse>, ApiError> {
    let template = Template::new(
        request.name,
        request.category.as_str(),
        request.description,
        request.html_template,
    );
    state.templates.save(&template).await?;
    Ok(Json(template.into()))
}

/// DELETE /api/templates/{template_id} - delete a template
pub async fn delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    state
        .templates
        .find_by_id(&template_id)
        .await?
        .ok_or_else(|| PagecraftError::not_found("template", &template_id))?;

    state.templates.delete(&template_id).await?;
    Ok(Json(DeleteAck { success: true }))
}
