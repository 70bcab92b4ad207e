use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid image ID: {0}")]
    InvalidImageId(String),

    #[error("Invalid image name: {0}")]
    InvalidImageName(String),

    #[error("{0} is required")]
    MissingField(String),

    #[error("file is not a png file (content type: {0})")]
    UnsupportedContentType(String),
}
