use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jobscout_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            AppError::Validation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
            }
            AppError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            AppError::Upstream { .. } | AppError::Network(_) | AppError::RateLimited => {
                (StatusCode::BAD_GATEWAY, "upstream_error")
            }
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.0.to_string(),
            field: self.0.field().map(str::to_string),
        };

        (status, axum::Json(body)).into_response()
    }
}
