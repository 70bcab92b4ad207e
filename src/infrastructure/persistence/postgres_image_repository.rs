use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::application::ports::{ImageRepository, RepositoryError};
use crate::domain::entities::Image;
use crate::domain::value_objects::{ImageId, ImageName};

pub struct PostgresImageRepository {
    pool: PgPool,
}

impl PostgresImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PostgresImageRepository {
    async fn insert(&self, name: &ImageName) -> Result<ImageId, RepositoryError> {
        let image = Image::new(name.clone());

        sqlx::query("INSERT INTO images (id, name, date) VALUES ($1, $2, $3)")
            .bind(image.id().as_str())
            .bind(image.name().as_str())
            .bind(image.date())
            .execute(&self.pool)
            .await?;

        debug!(image_id = %image.id(), "Image row inserted");
        Ok(image.id().clone())
    }

    async fn fetch(&self, id: &ImageId) -> Result<Image, RepositoryError> {
        let row = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT id, name, date
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => r.into_domain(),
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Image>, RepositoryError> {
        let rows = sqlx::query_as::<_, ImageRow>("SELECT id, name, date FROM images")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ImageRow::into_domain).collect()
    }

    async fn delete(&self, id: &ImageId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(image_id = %id, "No image row to delete");
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: String,
    name: String,
    date: String,
}

impl ImageRow {
    fn into_domain(self) -> Result<Image, RepositoryError> {
        let id = self
            .id
            .parse::<ImageId>()
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;

        let name = ImageName::new(self.name).map_err(|e| {
            RepositoryError::CorruptRecord(format!("image {}: {}", id, e))
        })?;

        Ok(Image::reconstruct(id, name, self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_domain() {
        let row = ImageRow {
            id: "abcd".to_string(),
            name: "cat".to_string(),
            date: "Mon Jan  2 15:04:05 UTC 2006".to_string(),
        };

        let image = row.into_domain().unwrap();

        assert_eq!(image.id().as_str(), "abcd");
        assert_eq!(image.name().as_str(), "cat");
        assert_eq!(image.date(), "Mon Jan  2 15:04:05 UTC 2006");
    }

    #[test]
    fn test_row_with_unsafe_id_is_corrupt() {
        let row = ImageRow {
            id: "../escape".to_string(),
            name: "cat".to_string(),
            date: String::new(),
        };

        assert!(matches!(
            row.into_domain(),
            Err(RepositoryError::CorruptRecord(_))
        ));
    }
}
