use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::errors::{ErrorKind, ImageUseCaseError};

/// Operation an error belongs to; decides the message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListImages,
    UploadImage,
    GetImage,
    DeleteImage,
}

impl Operation {
    pub fn phrase(&self) -> &'static str {
        match self {
            Operation::ListImages => "Error getting images",
            Operation::UploadImage => "Error uploading image",
            Operation::GetImage => "Error getting image",
            Operation::DeleteImage => "Error deleting image",
        }
    }
}

/// How error kinds map onto HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Every failure is 400, as existing clients expect
    #[default]
    Flat,
    /// 400 for validation, 404 for missing images, 500 for store failures
    Strict,
}

impl StatusPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Flat
        }
    }

    pub fn status_for(&self, kind: ErrorKind) -> StatusCode {
        match (self, kind) {
            (StatusPolicy::Flat, _) | (StatusPolicy::Strict, ErrorKind::Validation) => {
                StatusCode::BAD_REQUEST
            }
            (StatusPolicy::Strict, ErrorKind::NotFound) => StatusCode::NOT_FOUND,
            (StatusPolicy::Strict, ErrorKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response, rendered as plain text
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Malformed request that never reached a use case
    pub fn rejected(operation: Operation, detail: impl std::fmt::Display) -> Self {
        let message = format!("{}: {}", operation.phrase(), detail);
        error!("{}", message);
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn from_use_case(
        operation: Operation,
        err: ImageUseCaseError,
        policy: StatusPolicy,
    ) -> Self {
        let kind = err.kind();
        let message = format!("{}: {}", operation.phrase(), err);
        error!(kind = ?kind, "{}", message);
        Self::new(policy.status_for(kind), message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
