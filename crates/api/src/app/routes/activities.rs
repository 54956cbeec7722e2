use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use clubhub_activities::ActivityDirectory;
use clubhub_core::Email;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_activities))
        .route("/:name", get(get_activity))
        .route("/:name/signup", post(signup))
        .route("/:name/unregister", post(unregister))
}

pub async fn list_activities(
    Extension(directory): Extension<Arc<ActivityDirectory>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(directory.list())).into_response()
}

pub async fn get_activity(
    Extension(directory): Extension<Arc<ActivityDirectory>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match directory.get(&name) {
        Ok(activity) => (StatusCode::OK, Json(activity)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn signup(
    Extension(directory): Extension<Arc<ActivityDirectory>>,
    Path(name): Path<String>,
    query: Result<Query<dto::EmailQuery>, QueryRejection>,
) -> axum::response::Response {
    let email = match query {
        Ok(Query(q)) => Email::new(q.email),
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.body_text()),
    };

    match directory.enroll(&name, email) {
        Ok(confirmation) => (StatusCode::OK, Json(dto::MessageResponse::from(confirmation))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn unregister(
    Extension(directory): Extension<Arc<ActivityDirectory>>,
    Path(name): Path<String>,
    query: Result<Query<dto::EmailQuery>, QueryRejection>,
) -> axum::response::Response {
    let email = match query {
        Ok(Query(q)) => Email::new(q.email),
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.body_text()),
    };

    match directory.withdraw(&name, email) {
        Ok(confirmation) => (StatusCode::OK, Json(dto::MessageResponse::from(confirmation))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
