//! Error types for the API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! body always carries the `{success: false, error}` envelope the map
//! client expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coastwatch_registry::RegistryError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request failed validation; the message is surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Parse a UUID from a request path segment.
///
/// A malformed ID is a client error, not a missing resource.
pub(crate) fn parse_uuid(s: &str) -> Result<uuid::Uuid, ApiError> {
    s.parse::<uuid::Uuid>()
        .map_err(|e| ApiError::Validation(format!("Invalid id '{s}': {e}")))
}
