use crate::error::MerchantError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// An HTTP failure with a plain-text body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Validation failures are reported verbatim. Gateway-side failures are
    /// collapsed into `fallback` so no upstream detail leaks to the client.
    pub fn from_merchant_error(err: &MerchantError, fallback: &str) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal(fallback)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
