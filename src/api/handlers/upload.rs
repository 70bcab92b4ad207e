use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
    Extension,
};
use std::io::Cursor;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::errors::{ApiError, Operation, StatusPolicy};
use crate::application::dto::{UploadImageRequest, UploadImageResponse};
use crate::application::ports::BlobReader;
use crate::application::use_cases::UploadImageUseCase;
use crate::domain::errors::DomainError;

/// Multipart form accepted by `POST /images`
#[derive(ToSchema)]
pub struct UploadForm {
    /// Display name for the image
    pub name: String,
    /// PNG file; the part must declare `Content-Type: image/png`
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// POST /images
/// Upload a PNG image from a multipart form
#[utoipa::path(
    post,
    path = "/images",
    tag = "images",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image uploaded", body = UploadImageResponse),
        (status = 400, description = "Upload failed", body = String, content_type = "text/plain")
    )
)]
pub async fn upload_handler(
    State(use_case): State<Arc<UploadImageUseCase>>,
    Extension(policy): Extension<StatusPolicy>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadImageResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|e| ApiError::rejected(Operation::UploadImage, e.body_text()))?;

    // Fields may arrive in any order; the file part is buffered up to the
    // body limit
    let mut name = None;
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::rejected(Operation::UploadImage, e.body_text()))?
    {
        match field.name() {
            Some("name") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::rejected(Operation::UploadImage, e.body_text()))?;
                name = Some(text);
            }
            Some("file") => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::rejected(Operation::UploadImage, e.body_text()))?;
                file = Some((content_type, bytes));
            }
            _ => {}
        }
    }

    let missing = |field: &str| {
        ApiError::from_use_case(
            Operation::UploadImage,
            DomainError::MissingField(field.to_string()).into(),
            policy,
        )
    };
    let name = name.ok_or_else(|| missing("name"))?;
    let (content_type, bytes) = file.ok_or_else(|| missing("file"))?;

    let request = UploadImageRequest { name, content_type };
    let reader: BlobReader = Box::pin(Cursor::new(bytes));

    let response = use_case
        .execute(request, reader)
        .await
        .map_err(|e| ApiError::from_use_case(Operation::UploadImage, e, policy))?;

    Ok(Json(response))
}
