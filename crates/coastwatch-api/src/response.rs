//! The `{success, data?, error?, message?}` response envelope.
//!
//! Every endpoint wraps its payload in this envelope; errors produce the
//! same shape with `success: false` via
//! [`ApiError`](crate::error::ApiError).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` for this type; errors never construct it.
    pub success: bool,
    /// The payload, when the operation returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable confirmation for mutations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// A 200 response carrying data.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            status: StatusCode::OK,
        }
    }

    /// A 201 response carrying the created record and a confirmation.
    pub fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(String::from(message)),
            status: StatusCode::CREATED,
        }
    }

    /// Attach a confirmation message.
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(String::from(message));
        self
    }
}

impl ApiResponse<()> {
    /// A 200 response with only a confirmation message.
    pub fn message_only(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(String::from(message)),
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
