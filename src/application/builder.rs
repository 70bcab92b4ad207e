use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::errors::StatusPolicy;
use crate::api::router::AppState;
use crate::application::{
    ports::{ImageBlobStore, ImageRepository},
    use_cases::{DeleteImageUseCase, GetImageUseCase, ListImagesUseCase, UploadImageUseCase},
};
use crate::config::Config;
use crate::infrastructure::{
    persistence::PostgresImageRepository, storage::ObjectStoreBlobStore,
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    image_repo: Option<Arc<dyn ImageRepository>>,
    blob_store: Option<Arc<dyn ImageBlobStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            image_repo: None,
            blob_store: None,
        }
    }

    /// Connect the database pool and apply migrations when enabled
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(self.config.db_max_connections)
            .min_connections(self.config.db_min_connections)
            .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
            .connect(&self.config.database_url)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                e
            })?;

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
        );

        if self.config.run_migrations {
            info!("Running database migrations");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to run migrations: {}", e);
                    e
                })?;
        }

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an existing pool instead of connecting (tests, tools)
    pub fn with_pool(mut self, pool: sqlx::PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Initialize infrastructure layer (repository and blob store)
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        if self.image_repo.is_none() {
            let image_repo: Arc<dyn ImageRepository> =
                Arc::new(PostgresImageRepository::new(pool.clone()));
            self.image_repo = Some(image_repo);
        }

        if self.blob_store.is_none() {
            let blob_store: Arc<dyn ImageBlobStore> =
                Arc::new(ObjectStoreBlobStore::from_config(&self.config).await?);
            self.blob_store = Some(blob_store);
        }

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Override the image repository
    pub fn with_image_repository(mut self, image_repo: Arc<dyn ImageRepository>) -> Self {
        self.image_repo = Some(image_repo);
        self
    }

    /// Override the blob store
    pub fn with_blob_store(mut self, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        self.blob_store = Some(blob_store);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let image_repo = self.image_repo.ok_or("Image repository not initialized")?;
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;

        // Initialize use cases (application layer)
        let upload_use_case = Arc::new(UploadImageUseCase::new(
            Arc::clone(&image_repo),
            Arc::clone(&blob_store),
        ));
        let get_use_case = Arc::new(GetImageUseCase::new(
            Arc::clone(&image_repo),
            Arc::clone(&blob_store),
        ));
        let list_use_case = Arc::new(ListImagesUseCase::new(
            Arc::clone(&image_repo),
            Arc::clone(&blob_store),
        ));
        let delete_use_case = Arc::new(DeleteImageUseCase::new(
            Arc::clone(&image_repo),
            Arc::clone(&blob_store),
        ));

        info!("Application layer initialized");

        Ok(AppState {
            pool: Arc::new(pool),
            upload_use_case,
            get_use_case,
            list_use_case,
            delete_use_case,
            status_policy: StatusPolicy::from_strict(self.config.strict_status_codes),
            public_dir: self.config.public_dir.clone(),
            max_upload_bytes: self.config.max_upload_bytes,
            request_timeout: Duration::from_secs(self.config.request_timeout_secs),
        })
    }
}
