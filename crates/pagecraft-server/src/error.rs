//! HTTP error mapping.
//!
//! Translates the core error taxonomy into status codes with the short
//! user-facing messages of the API: NotFound and InvalidState surface as
//! 4xx, everything else as a 5xx wrapping the underlying message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagecraft_core::error::PagecraftError;
use serde_json::json;

/// A client-facing error: status code plus a short detail message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Prefixes server-side failures with an operation label (e.g.
    /// "생성 실패"); 4xx details are kept verbatim.
    pub fn with_context(mut self, prefix: &str) -> Self {
        if self.status.is_server_error() {
            self.detail = format!("{prefix}: {}", self.detail);
        }
        self
    }
}

impl From<PagecraftError> for ApiError {
    fn from(err: PagecraftError) -> Self {
        match &err {
            PagecraftError::NotFound { entity_type, id } => {
                let detail = match *entity_type {
                    "session" => "세션을 찾을 수 없습니다".to_string(),
                    "template" => "템플릿을 찾을 수 없습니다".to_string(),
                    "image" => "이미지를 찾을 수 없습니다".to_string(),
                    "image_file" => "이미지 파일이 존재하지 않습니다".to_string(),
                    "preview" => "미리보기를 찾을 수 없습니다".to_string(),
                    other => format!("{other} '{id}' 을(를) 찾을 수 없습니다"),
                };
                Self::new(StatusCode::NOT_FOUND, detail)
            }
            PagecraftError::InvalidState(_) => {
                Self::new(StatusCode::BAD_REQUEST, "문답이 완료되지 않았습니다")
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_with_korean_detail() {
        let err: ApiError = PagecraftError::not_found("session", "abc").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail, "세션을 찾을 수 없습니다");
    }

    #[test]
    fn test_invalid_state_maps_to_400() {
        let err: ApiError = PagecraftError::invalid_state("not done").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "문답이 완료되지 않았습니다");
    }

    #[test]
    fn test_upstream_maps_to_500_with_context_prefix() {
        let err: ApiError = PagecraftError::upstream("browser crashed").into();
        let err = err.with_context("생성 실패");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail.starts_with("생성 실패: "));
    }

    #[test]
    fn test_context_prefix_leaves_client_errors_alone() {
        let err: ApiError = PagecraftError::not_found("image", "1").into();
        let err = err.with_context("생성 실패");
        assert_eq!(err.detail, "이미지를 찾을 수 없습니다");
    }
}
