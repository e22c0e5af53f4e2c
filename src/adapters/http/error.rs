//! JSON error responses.
//!
//! Every failure body carries `error`; 402 adds `reason`, generation failures
//! add `details`, identity failures add `code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::{GenerateImageError, StartCheckoutError, VerifyCheckoutError};
use crate::domain::entitlement::DenialReason;
use crate::domain::generation::UploadError;

/// Error body shared by all endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reason: None,
            details: None,
            code: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::new(message))
    }

    pub fn payment_required(reason: DenialReason) -> Self {
        Self::new(
            StatusCode::PAYMENT_REQUIRED,
            ErrorResponse::new(reason.to_string()).with_reason(reason.code()),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(message))
    }

    pub fn auth_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("Authentication service unavailable").with_code("AUTH_ERROR"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        if let UploadError::MalformedForm(detail) = &err {
            tracing::debug!(%detail, "Rejected malformed multipart form");
        }
        ApiError::bad_request(err.to_string())
    }
}

impl From<GenerateImageError> for ApiError {
    fn from(err: GenerateImageError) -> Self {
        match err {
            GenerateImageError::Denied(reason) => ApiError::payment_required(reason),
            GenerateImageError::GenerationFailed { .. } => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Generation failed").with_details(err.details()),
            ),
        }
    }
}

impl From<StartCheckoutError> for ApiError {
    fn from(_: StartCheckoutError) -> Self {
        ApiError::internal("Failed to create checkout session")
    }
}

impl From<VerifyCheckoutError> for ApiError {
    fn from(err: VerifyCheckoutError) -> Self {
        match err {
            VerifyCheckoutError::MissingSessionId => ApiError::bad_request("Missing session_id"),
            VerifyCheckoutError::Provider(_) => ApiError::internal("Failed to verify session"),
        }
    }
}
