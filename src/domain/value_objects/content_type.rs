use crate::domain::errors::DomainError;

/// Declared content type of an uploaded file, accepted only when it is PNG.
///
/// The check is against the declared header value, not the file bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageContentType;

impl ImageContentType {
    pub const PNG: &'static str = "image/png";

    pub fn from_declared(declared: Option<&str>) -> Result<Self, DomainError> {
        match declared {
            Some(Self::PNG) => Ok(Self),
            Some(other) => Err(DomainError::UnsupportedContentType(other.to_string())),
            None => Err(DomainError::UnsupportedContentType("none".to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        "png"
    }
}
