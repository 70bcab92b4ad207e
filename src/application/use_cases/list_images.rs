use std::sync::Arc;

use crate::application::dto::{ImageDto, ListImagesResponse};
use crate::application::errors::ImageUseCaseError;
use crate::application::ports::{ImageBlobStore, ImageRepository};

/// Use case: List all images
pub struct ListImagesUseCase {
    image_repo: Arc<dyn ImageRepository>,
    blob_store: Arc<dyn ImageBlobStore>,
}

impl ListImagesUseCase {
    pub fn new(image_repo: Arc<dyn ImageRepository>, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        Self {
            image_repo,
            blob_store,
        }
    }

    /// Execute list. All-or-nothing: one URL failure fails the whole listing.
    pub async fn execute(&self) -> Result<ListImagesResponse, ImageUseCaseError> {
        let images = self.image_repo.fetch_all().await?;

        let images = images
            .into_iter()
            .map(|image| -> Result<ImageDto, ImageUseCaseError> {
                let url = self.blob_store.url_for(image.id())?;
                Ok(ImageDto::new(image, url))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListImagesResponse { images })
    }
}
