use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use std::sync::Arc;

use crate::api::errors::{ApiError, Operation, StatusPolicy};
use crate::application::errors::ImageUseCaseError;
use crate::application::dto::ImageDto;
use crate::application::use_cases::GetImageUseCase;
use crate::domain::value_objects::ImageId;

/// GET /images/{id}
/// Get one image record with its URL
#[utoipa::path(
    get,
    path = "/images/{id}",
    tag = "images",
    params(
        ("id" = String, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image found", body = ImageDto),
        (status = 400, description = "Image missing or lookup failed", body = String, content_type = "text/plain")
    )
)]
pub async fn get_handler(
    State(use_case): State<Arc<GetImageUseCase>>,
    Extension(policy): Extension<StatusPolicy>,
    Path(id): Path<String>,
) -> Result<Json<ImageDto>, ApiError> {
    let fail = |e: ImageUseCaseError| ApiError::from_use_case(Operation::GetImage, e, policy);

    let image_id = id.parse::<ImageId>().map_err(|e| fail(e.into()))?;
    let image = use_case.execute(&image_id).await.map_err(fail)?;

    Ok(Json(image))
}
