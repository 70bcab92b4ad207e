mod blob_store;
mod image_repository;

pub use blob_store::{BlobReader, ImageBlobStore, StorageError};
pub use image_repository::{ImageRepository, RepositoryError};

#[cfg(test)]
pub use blob_store::MockImageBlobStore;
#[cfg(test)]
pub use image_repository::MockImageRepository;
