use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Extension, Router,
};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer};

use crate::api::errors::StatusPolicy;
use crate::api::handlers::{
    delete_handler, get_handler, health_handler, list_handler, readiness_handler, upload_handler,
};
use crate::api::middleware::request_logging;
use crate::api::openapi::openapi_handler;
use crate::application::use_cases::{
    DeleteImageUseCase, GetImageUseCase, ListImagesUseCase, UploadImageUseCase,
};

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub upload_use_case: Arc<UploadImageUseCase>,
    pub get_use_case: Arc<GetImageUseCase>,
    pub list_use_case: Arc<ListImagesUseCase>,
    pub delete_use_case: Arc<DeleteImageUseCase>,
    pub status_policy: StatusPolicy,
    pub public_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let upload_state = Arc::clone(&state.upload_use_case);
    let get_state = Arc::clone(&state.get_use_case);
    let list_state = Arc::clone(&state.list_use_case);
    let delete_state = Arc::clone(&state.delete_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        // Image API
        .route("/images", get(list_handler).with_state(list_state))
        .route("/images", post(upload_handler).with_state(upload_state))
        .route("/images/{id}", get(get_handler).with_state(get_state))
        .route("/images/{id}", delete(delete_handler).with_state(delete_state))
        // Static files
        .nest_service("/public", ServeDir::new(&state.public_dir))
        .layer(Extension(state.status_policy))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
}
