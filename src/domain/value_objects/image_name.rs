use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Caller-supplied display name for an image. Free text, but never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageName(String);

impl ImageName {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidImageName(
                "name is required".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let err = ImageName::new(String::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidImageName(_)));
    }

    #[test]
    fn test_free_text_preserved() {
        let name = ImageName::new("  my cat, ünïcode & spaces ".to_string()).unwrap();
        assert_eq!(name.as_str(), "  my cat, ünïcode & spaces ");
    }
}
