use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Opaque unique identifier for an image.
///
/// New ids are random v4 UUIDs rendered in base57, which keeps them short and
/// free of visually ambiguous characters. Ids arriving from clients are only
/// checked for characters that are safe inside an object key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    const ALPHABET: &'static [u8; 57] =
        b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    const ENCODED_LENGTH: usize = 22;
    const MAX_LENGTH: usize = 128;

    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        let base = Self::ALPHABET.len() as u128;
        let mut value = uuid.as_u128();
        let mut digits = Vec::with_capacity(Self::ENCODED_LENGTH);

        while value > 0 {
            digits.push(Self::ALPHABET[(value % base) as usize]);
            value /= base;
        }
        while digits.len() < Self::ENCODED_LENGTH {
            digits.push(Self::ALPHABET[0]);
        }
        digits.reverse();

        // Every byte comes from the ASCII alphabet above
        Self(digits.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ImageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::InvalidImageId(
                "Image ID cannot be empty".to_string(),
            ));
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidImageId(format!(
                "Image ID too long: {} > {}",
                s.len(),
                Self::MAX_LENGTH
            )));
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidImageId(format!(
                "'{}' contains characters other than letters, digits, '-' or '_'",
                s
            )));
        }

        Ok(Self(s.to_string()))
    }
}
