use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::errors::ImageUseCaseError;
use crate::application::ports::{ImageBlobStore, ImageRepository};
use crate::domain::entities::Image;

/// Options for one reconcile pass
#[derive(Debug, Clone, Copy)]
pub struct ReconcileOptions {
    /// Delete the rows whose blob is missing
    pub fix: bool,
    /// Rows younger than this are left alone; their upload may still be
    /// writing the blob
    pub min_age: Duration,
}

/// Outcome of one reconcile pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Rows examined
    pub scanned: usize,
    /// Rows without a blob that are old enough to act on
    pub orphans: Vec<Image>,
    /// Orphan rows deleted (only with `fix`)
    pub removed: usize,
    /// Rows without a blob skipped for being younger than `min_age`
    pub skipped_recent: usize,
}

/// Use case: Find (and optionally drop) metadata rows whose blob is missing
pub struct ReconcileImagesUseCase {
    image_repo: Arc<dyn ImageRepository>,
    blob_store: Arc<dyn ImageBlobStore>,
}

impl ReconcileImagesUseCase {
    pub fn new(image_repo: Arc<dyn ImageRepository>, blob_store: Arc<dyn ImageBlobStore>) -> Self {
        Self {
            image_repo,
            blob_store,
        }
    }

    /// Execute one pass, measuring row age against `now`
    ///
    /// Rows whose date cannot be parsed were not stamped by an upload and are
    /// treated as old enough.
    pub async fn execute(
        &self,
        options: ReconcileOptions,
        now: DateTime<Utc>,
    ) -> Result<ReconcileReport, ImageUseCaseError> {
        let images = self.image_repo.fetch_all().await?;
        let mut report = ReconcileReport {
            scanned: images.len(),
            ..ReconcileReport::default()
        };

        for image in images {
            // 1. Rows with content are fine
            if self.blob_store.exists(image.id()).await? {
                continue;
            }

            // 2. Leave recent rows to their in-flight upload
            match image.created_at_time() {
                Some(created) if now - created < options.min_age => {
                    report.skipped_recent += 1;
                    continue;
                }
                Some(_) => {}
                None => warn!(image_id = %image.id(), date = %image.date(), "Unparseable image date"),
            }

            // 3. Drop the row
            if options.fix {
                self.image_repo.delete(image.id()).await?;
                report.removed += 1;
                info!(image_id = %image.id(), "Removed image row without blob");
            }

            report.orphans.push(image);
        }

        info!(
            scanned = report.scanned,
            orphans = report.orphans.len(),
            removed = report.removed,
            skipped_recent = report.skipped_recent,
            "Reconcile pass complete"
        );

        Ok(report)
    }
}
