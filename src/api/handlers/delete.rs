use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use std::sync::Arc;

use crate::api::errors::{ApiError, Operation, StatusPolicy};
use crate::application::errors::ImageUseCaseError;
use crate::application::dto::DeleteImageResponse;
use crate::application::use_cases::DeleteImageUseCase;
use crate::domain::value_objects::ImageId;

/// DELETE /images/{id}
/// Delete image content, then its record
#[utoipa::path(
    delete,
    path = "/images/{id}",
    tag = "images",
    params(
        ("id" = String, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted (also when it did not exist)", body = DeleteImageResponse),
        (status = 400, description = "Delete failed", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_handler(
    State(use_case): State<Arc<DeleteImageUseCase>>,
    Extension(policy): Extension<StatusPolicy>,
    Path(id): Path<String>,
) -> Result<Json<DeleteImageResponse>, ApiError> {
    let fail = |e: ImageUseCaseError| ApiError::from_use_case(Operation::DeleteImage, e, policy);

    let image_id = id.parse::<ImageId>().map_err(|e| fail(e.into()))?;
    let response = use_case.execute(&image_id).await.map_err(fail)?;

    Ok(Json(response))
}
