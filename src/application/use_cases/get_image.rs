use std::sync::Arc;

use crate::application::dto::ImageDto;
use crate::application::errors::ImageUseCaseError;
use crate::application::ports::{ImageBlobStore, ImageRepository};
use crate::domain::value_objects::ImageId;

/// Use case: Get one image
pub struct GetImageUseCase {
    image_repo: Arc<dyn ImageRepository>,
    blob_store: Arc<dyn ImageBlobStore>,
}

impl GetImageUseCase {
    pub fn new(image_repo: Arc<dyn ImageRepository>, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        Self {
            image_repo,
            blob_store,
        }
    }

    /// Look up the record and attach its URL. The blob itself is not checked.
    pub async fn execute(&self, id: &ImageId) -> Result<ImageDto, ImageUseCaseError> {
        let image = self.image_repo.fetch(id).await?;
        let url = self.blob_store.url_for(image.id())?;

        Ok(ImageDto::new(image, url))
    }
}
