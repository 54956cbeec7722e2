use axum::{http::StatusCode, response::Redirect};

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /` sends browsers to the front-end.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
