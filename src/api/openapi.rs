use axum::response::Json;
use utoipa::OpenApi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::api::handlers::upload::UploadForm;
use crate::application::dto::{
    DeleteImageResponse, ImageDto, ListImagesResponse, UploadImageResponse,
};

/// OpenAPI specification for the image API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Image Vault API",
        version = "1.0.0",
        description = "Upload, list, fetch and delete PNG images"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::get::get_handler,
        crate::api::handlers::delete::delete_handler,
    ),
    components(
        schemas(
            ImageDto,
            ListImagesResponse,
            UploadImageResponse,
            DeleteImageResponse,
            UploadForm,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "images", description = "Image operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
