use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::Image;
use crate::domain::value_objects::{ImageId, ImageName};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// Port for image metadata persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Persist a new record stamped with the current time and return its
    /// generated id
    async fn insert(&self, name: &ImageName) -> Result<ImageId, RepositoryError>;

    /// Fetch one record; `NotFound` when no row matches
    async fn fetch(&self, id: &ImageId) -> Result<Image, RepositoryError>;

    /// Fetch every record, in no particular order
    async fn fetch_all(&self) -> Result<Vec<Image>, RepositoryError>;

    /// Delete a record. Succeeds when the row does not exist.
    async fn delete(&self, id: &ImageId) -> Result<(), RepositoryError>;
}
