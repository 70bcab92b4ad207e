use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dto::{UploadImageRequest, UploadImageResponse};
use crate::application::errors::ImageUseCaseError;
use crate::application::ports::{BlobReader, ImageBlobStore, ImageRepository};
use crate::domain::value_objects::{ImageContentType, ImageName};

/// Use case: Upload an image
pub struct UploadImageUseCase {
    image_repo: Arc<dyn ImageRepository>,
    blob_store: Arc<dyn ImageBlobStore>,
}

impl UploadImageUseCase {
    pub fn new(image_repo: Arc<dyn ImageRepository>, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        Self {
            image_repo,
            blob_store,
        }
    }

    /// Execute upload workflow
    ///
    /// The metadata row is written before the blob. If the blob write fails
    /// the row stays behind; nothing is rolled back.
    pub async fn execute(
        &self,
        request: UploadImageRequest,
        reader: BlobReader,
    ) -> Result<UploadImageResponse, ImageUseCaseError> {
        // 1. Validate before touching either store
        let name = ImageName::new(request.name)?;
        ImageContentType::from_declared(request.content_type.as_deref())?;

        // 2. Reserve the record
        let id = self.image_repo.insert(&name).await?;

        // 3. Stream content into the blob store
        let size_bytes = self.blob_store.put(&id, reader).await.map_err(|e| {
            warn!(image_id = %id, error = %e, "Blob upload failed, metadata row left in place");
            e
        })?;

        // 4. Derive the public URL
        let url = self.blob_store.url_for(&id)?;

        info!(image_id = %id, size_bytes, "Image uploaded");

        Ok(UploadImageResponse {
            url,
            id: id.to_string(),
        })
    }
}
