use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use crate::api::models::ErrorResponse;
use crate::errors::A11yError;

impl IntoResponse for A11yError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            A11yError::Config(_) | A11yError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
