use axum::{routing::get, Router};

pub mod activities;
pub mod system;

/// Router for the JSON API and the landing redirect.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/activities", activities::router())
}
