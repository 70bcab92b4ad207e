use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dto::DeleteImageResponse;
use crate::application::errors::ImageUseCaseError;
use crate::application::ports::{ImageBlobStore, ImageRepository};
use crate::domain::value_objects::ImageId;

/// Use case: Delete an image
pub struct DeleteImageUseCase {
    image_repo: Arc<dyn ImageRepository>,
    blob_store: Arc<dyn ImageBlobStore>,
}

impl DeleteImageUseCase {
    pub fn new(image_repo: Arc<dyn ImageRepository>, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        Self {
            image_repo,
            blob_store,
        }
    }

    /// Execute delete workflow
    ///
    /// The blob goes first; the record is only removed once the blob delete
    /// succeeded. Both steps succeed when their target is already gone.
    pub async fn execute(&self, id: &ImageId) -> Result<DeleteImageResponse, ImageUseCaseError> {
        // 1. Remove content
        self.blob_store.delete(id).await.map_err(|e| {
            warn!(image_id = %id, error = %e, "Blob delete failed, metadata row kept");
            e
        })?;

        // 2. Remove record
        self.image_repo.delete(id).await?;

        info!(image_id = %id, "Image deleted");

        Ok(DeleteImageResponse { id: id.to_string() })
    }
}
