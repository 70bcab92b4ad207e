use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

use crate::domain::value_objects::ImageId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("Storage not configured: {0}")]
    Configuration(String),
}

/// Type alias for async reader
pub type BlobReader = Pin<Box<dyn AsyncRead + Send>>;

/// Port for image content storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageBlobStore: Send + Sync {
    /// Public URL for an image. Pure: does not check the object exists.
    fn url_for(&self, id: &ImageId) -> Result<String, StorageError>;

    /// Stream the reader into the object for `id`, replacing any existing
    /// object. Returns the number of bytes written.
    async fn put(&self, id: &ImageId, reader: BlobReader) -> Result<u64, StorageError>;

    /// Delete the object for `id`. Succeeds when the object does not exist.
    async fn delete(&self, id: &ImageId) -> Result<(), StorageError>;

    /// Whether an object is stored for `id`
    async fn exists(&self, id: &ImageId) -> Result<bool, StorageError>;
}
