use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("${0} is not set")]
    Missing(&'static str),

    #[error("${key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Object store backend selected by `STORAGE_BACKEND`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Gcs,
    S3,
    Local(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub listen_host: String,
    pub database_url: String,
    pub storage_bucket: String,
    pub storage_url: String,
    pub storage_backend: StorageBackend,
    pub public_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub request_timeout_secs: u64,
    pub strict_status_codes: bool,
    pub run_migrations: bool,
    pub log_format: LogFormat,
    // Database connection pool settings
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = parse(required("PORT")?, "PORT")?;
        let database_url = required("DATABASE_URL")?;
        let storage_url = required("STORAGE_URL")?;

        let storage_backend = match get("STORAGE_BACKEND").as_deref() {
            None | Some("gcs") => StorageBackend::Gcs,
            Some("s3") => StorageBackend::S3,
            Some("memory") => StorageBackend::Memory,
            Some("local") => StorageBackend::Local(PathBuf::from(required(
                "LOCAL_STORAGE_ROOT",
            )?)),
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORAGE_BACKEND",
                    reason: format!("unknown backend '{}'", other),
                })
            }
        };

        // Only the cloud backends address a bucket
        let storage_bucket = match storage_backend {
            StorageBackend::Gcs | StorageBackend::S3 => required("STORAGE_BUCKET")?,
            _ => get("STORAGE_BUCKET").unwrap_or_default(),
        };

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    reason: format!("expected 'text' or 'json', got '{}'", other),
                })
            }
        };

        let config = Self {
            port,
            listen_host: get("LISTEN_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            database_url,
            storage_bucket,
            storage_url,
            storage_backend,
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./public")),
            max_upload_bytes: optional(get("MAX_UPLOAD_BYTES"), "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            request_timeout_secs: optional(get("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", 30)?,
            strict_status_codes: optional(get("STRICT_STATUS_CODES"), "STRICT_STATUS_CODES", false)?,
            run_migrations: optional(get("RUN_MIGRATIONS"), "RUN_MIGRATIONS", true)?,
            log_format,
            db_max_connections: optional(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 10)?,
            db_min_connections: optional(get("DB_MIN_CONNECTIONS"), "DB_MIN_CONNECTIONS", 1)?,
            db_acquire_timeout_secs: optional(
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                "DB_ACQUIRE_TIMEOUT_SECS",
                30,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate database URL format
        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err(ConfigError::Invalid {
                key: "DATABASE_URL",
                reason: "must start with postgres:// or postgresql://".to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid {
                key: "PORT",
                reason: "must be between 1 and 65535".to_string(),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                reason: "must be at least 1 second".to_string(),
            });
        }

        if self.db_min_connections > self.db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: format!(
                    "{} exceeds DB_MAX_CONNECTIONS ({})",
                    self.db_min_connections, self.db_max_connections
                ),
            });
        }

        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }
}

fn parse<T>(value: String, key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn optional<T>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |v| parse(v, key))
}
