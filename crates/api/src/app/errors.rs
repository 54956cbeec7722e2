use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use clubhub_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(detail) => json_error(StatusCode::NOT_FOUND, detail),
        DomainError::Conflict(detail) => json_error(StatusCode::BAD_REQUEST, detail),
    }
}

/// Error body shape shared by every endpoint: `{"detail": "..."}`.
pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": detail.into(),
        })),
    )
        .into_response()
}
