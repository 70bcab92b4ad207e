//! Error type shared by the image use cases
//!
//! Every use case reports through [`ImageUseCaseError`]; the API layer picks a
//! response status from [`ErrorKind`] and prefixes the operation phrase.

use thiserror::Error;

use crate::application::ports::{RepositoryError, StorageError};
use crate::domain::errors::DomainError;

/// Coarse classification of a use case failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input; no store was touched
    Validation,
    /// The image record does not exist
    NotFound,
    /// Any other repository or storage failure
    Internal,
}

#[derive(Debug, Error)]
pub enum ImageUseCaseError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Repository(RepositoryError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ImageUseCaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageUseCaseError::Validation(_) => ErrorKind::Validation,
            ImageUseCaseError::NotFound(_) => ErrorKind::NotFound,
            ImageUseCaseError::Repository(_) | ImageUseCaseError::Storage(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<RepositoryError> for ImageUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => ImageUseCaseError::NotFound(err.to_string()),
            other => ImageUseCaseError::Repository(other),
        }
    }
}
