use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Database readiness response
#[derive(serde::Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response_time_ms: u64,
}

impl ReadinessResponse {
    fn new(status: &str, database: &str, error: Option<String>, elapsed: Duration) -> Self {
        Self {
            status: status.to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            database: database.to_string(),
            error,
            response_time_ms: elapsed.as_millis() as u64,
        }
    }
}

/// GET /health
/// Basic health check endpoint (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

/// GET /health/ready
/// Readiness check with database connectivity
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let start_time = Instant::now();

    // Check database connectivity with timeout
    let db_check = tokio::time::timeout(
        READINESS_TIMEOUT,
        sqlx::query("SELECT 1 as health_check").fetch_one(pool.as_ref()),
    )
    .await;

    let response_time = start_time.elapsed();

    match db_check {
        Ok(Ok(_)) => (
            StatusCode::OK,
            Json(ReadinessResponse::new("ready", "connected", None, response_time)),
        ),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse::new(
                    "not_ready",
                    "disconnected",
                    Some(sanitize_db_error(&e).to_string()),
                    response_time,
                )),
            )
        }
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse::new(
                "not_ready",
                "timeout",
                Some(format!(
                    "Database query timed out after {} seconds",
                    READINESS_TIMEOUT.as_secs()
                )),
                response_time,
            )),
        ),
    }
}

/// Coarse description of a database error for readiness responses
fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            "Database connection error"
        }
        sqlx::Error::Tls(_) => "Database TLS error",
        _ => "Database operation error",
    }
}
