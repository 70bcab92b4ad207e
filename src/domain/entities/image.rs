use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ImageId, ImageName};

/// Descriptive record for a stored image.
///
/// Records are immutable once created; the only lifecycle step after creation
/// is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    id: ImageId,
    name: ImageName,
    date: String,
}

impl Image {
    /// Unix `date` layout, e.g. `Mon Jan  2 15:04:05 UTC 2006`
    pub const DATE_FORMAT: &'static str = "%a %b %e %H:%M:%S %Z %Y";

    /// Create a new record with a fresh id, stamped with the current time
    pub fn new(name: ImageName) -> Self {
        Self::created_at(name, Utc::now())
    }

    pub fn created_at(name: ImageName, at: DateTime<Utc>) -> Self {
        Self {
            id: ImageId::new(),
            name,
            date: Self::format_date(at),
        }
    }

    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(id: ImageId, name: ImageName, date: String) -> Self {
        Self { id, name, date }
    }

    pub fn format_date(at: DateTime<Utc>) -> String {
        at.format(Self::DATE_FORMAT).to_string()
    }

    /// Creation time parsed back from `date`. `None` for dates not written
    /// by this service (they are always stamped in UTC).
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.date, "%a %b %e %H:%M:%S UTC %Y")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn id(&self) -> &ImageId {
        &self.id
    }

    pub fn name(&self) -> &ImageName {
        &self.name
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}
