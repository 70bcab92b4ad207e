use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::buffered::BufWriter;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::{Attribute, Attributes, ObjectStore};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::application::ports::{BlobReader, ImageBlobStore, StorageError};
use crate::config::{Config, StorageBackend};
use crate::domain::value_objects::{ImageContentType, ImageId};
use crate::infrastructure::storage::KeyBuilder;

/// Blob store backed by any `object_store` implementation (GCS, S3, local
/// disk, memory)
pub struct ObjectStoreBlobStore {
    store: Arc<dyn ObjectStore>,
    keys: KeyBuilder,
    // LocalFileSystem rejects object attributes
    tag_content_type: bool,
}

impl ObjectStoreBlobStore {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            keys: KeyBuilder::new(public_base_url),
            tag_content_type: true,
        }
    }

    pub fn without_content_type(mut self) -> Self {
        self.tag_content_type = false;
        self
    }

    /// Build the backend selected in configuration. Cloud credentials come
    /// from the provider's usual environment variables.
    pub async fn from_config(config: &Config) -> Result<Self, StorageError> {
        let blob_store = match &config.storage_backend {
            StorageBackend::Gcs => {
                let gcs = GoogleCloudStorageBuilder::from_env()
                    .with_bucket_name(&config.storage_bucket)
                    .build()?;
                Self::new(Arc::new(gcs), &config.storage_url)
            }
            StorageBackend::S3 => {
                let s3 = AmazonS3Builder::from_env()
                    .with_bucket_name(&config.storage_bucket)
                    .build()?;
                Self::new(Arc::new(s3), &config.storage_url)
            }
            StorageBackend::Local(root) => {
                fs::create_dir_all(root).await?;
                let local = LocalFileSystem::new_with_prefix(root)?;
                Self::new(Arc::new(local), &config.storage_url).without_content_type()
            }
            StorageBackend::Memory => Self::new(Arc::new(InMemory::new()), &config.storage_url),
        };

        info!(
            backend = ?config.storage_backend,
            bucket = %config.storage_bucket,
            "Blob store initialized"
        );
        Ok(blob_store)
    }
}

#[async_trait]
impl ImageBlobStore for ObjectStoreBlobStore {
    fn url_for(&self, id: &ImageId) -> Result<String, StorageError> {
        self.keys.public_url(id)
    }

    async fn put(&self, id: &ImageId, mut reader: BlobReader) -> Result<u64, StorageError> {
        let path = self.keys.object_path(id);
        debug!("Writing blob to {}", path);

        let mut writer = BufWriter::new(Arc::clone(&self.store), path);
        if self.tag_content_type {
            writer = writer.with_attributes(Attributes::from_iter([(
                Attribute::ContentType,
                ImageContentType::PNG,
            )]));
        }

        // A failure here may leave a partial object behind
        let size_bytes = tokio::io::copy(&mut reader, &mut writer).await?;
        writer.shutdown().await?;

        debug!("Blob written successfully: id={}, size={}", id, size_bytes);
        Ok(size_bytes)
    }

    async fn delete(&self, id: &ImageId) -> Result<(), StorageError> {
        let path = self.keys.object_path(id);

        match self.store.delete(&path).await {
            Ok(()) => Ok(()),
            Err(object_store::Error::NotFound { .. }) => {
                debug!("Blob already absent: {}", path);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, id: &ImageId) -> Result<bool, StorageError> {
        match self.store.head(&self.keys.object_path(id)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
