use axum::{extract::State, response::Json, Extension};
use std::sync::Arc;

use crate::api::errors::{ApiError, Operation, StatusPolicy};
use crate::application::dto::ListImagesResponse;
use crate::application::use_cases::ListImagesUseCase;

/// GET /images
/// List every image with its URL
#[utoipa::path(
    get,
    path = "/images",
    tag = "images",
    responses(
        (status = 200, description = "Images retrieved", body = ListImagesResponse),
        (status = 400, description = "Listing failed", body = String, content_type = "text/plain")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListImagesUseCase>>,
    Extension(policy): Extension<StatusPolicy>,
) -> Result<Json<ListImagesResponse>, ApiError> {
    let response = use_case
        .execute()
        .await
        .map_err(|e| ApiError::from_use_case(Operation::ListImages, e, policy))?;

    tracing::debug!(count = response.images.len(), "Images data retrieved");
    Ok(Json(response))
}
