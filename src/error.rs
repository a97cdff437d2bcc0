//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "missing required field: title",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Server/Store    | 500 Internal Server Error  |
/// | 4000–4999 | Catalog rules   | 422 Unprocessable Entity   |
/// | 5000–5999 | Authentication  | 401 Unauthorized           |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Product with the given ID was not found.
    #[error("product not found: {0}")]
    ProductNotFound(uuid::Uuid),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A required product field was missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// All carousel slots are taken; the product cannot be highlighted.
    #[error("highlight limit reached: at most {0} products may be highlighted")]
    HighlightLimitReached(usize),

    /// A product carries more inline images than allowed.
    #[error("too many images: at most {0} images per product")]
    TooManyImages(usize),

    /// An uploaded image could not be decoded.
    #[error("image decode failed: {0}")]
    ImageDecode(String),

    /// An import file did not match the expected catalog backup shape.
    #[error("invalid import file: {0}")]
    InvalidImportFile(String),

    /// Credentials did not match any admin user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, unknown, or expired session token.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::MissingField(_) => 1002,
            Self::InvalidImportFile(_) => 1003,
            Self::ImageDecode(_) => 1004,
            Self::ProductNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
            Self::HighlightLimitReached(_) => 4001,
            Self::TooManyImages(_) => 4002,
            Self::InvalidCredentials => 5001,
            Self::Unauthorized(_) => 5002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::MissingField(_)
            | Self::InvalidImportFile(_)
            | Self::ImageDecode(_) => StatusCode::BAD_REQUEST,
            Self::ProductNotFound(_) => StatusCode::NOT_FOUND,
            Self::HighlightLimitReached(_) | Self::TooManyImages(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::InvalidCredentials | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let err = GatewayError::MissingField("title");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1002);
    }

    #[test]
    fn highlight_limit_maps_to_422() {
        let err = GatewayError::HighlightLimitReached(5);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), 4001);
    }

    #[test]
    fn auth_errors_map_to_401() {
        assert_eq!(
            GatewayError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::Unauthorized("missing bearer token").status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn sqlx_errors_become_persistence_errors() {
        let err: GatewayError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.error_code(), 3001);
    }
}
