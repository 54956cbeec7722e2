//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use clubhub_activities::ActivityDirectory;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The directory is injected so each caller owns its catalog's lifetime.
pub fn build_app(config: &ApiConfig, directory: Arc<ActivityDirectory>) -> Router {
    routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(Extension(directory))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
