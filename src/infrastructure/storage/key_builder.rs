use object_store::path::Path;

use crate::application::ports::StorageError;
use crate::domain::value_objects::{ImageContentType, ImageId};

/// Utility for generating object keys and public URLs
pub struct KeyBuilder {
    public_base_url: String,
}

impl KeyBuilder {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
        }
    }

    /// Object name: {id}.png
    pub fn file_name(&self, id: &ImageId) -> String {
        format!("{}.{}", id, ImageContentType.extension())
    }

    pub fn object_path(&self, id: &ImageId) -> Path {
        Path::from(self.file_name(id))
    }

    /// Public URL: {base}/{id}.png
    ///
    /// A base without a trailing slash gets one, so `https://cdn.test/images`
    /// and `https://cdn.test/images/` produce the same URL.
    pub fn public_url(&self, id: &ImageId) -> Result<String, StorageError> {
        if self.public_base_url.is_empty() {
            return Err(StorageError::Configuration(
                "$STORAGE_URL is not set".to_string(),
            ));
        }

        let separator = if self.public_base_url.ends_with('/') {
            ""
        } else {
            "/"
        };

        Ok(format!(
            "{}{}{}",
            self.public_base_url,
            separator,
            self.file_name(id)
        ))
    }
}
