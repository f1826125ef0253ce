use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Service failure mapped onto the wire contract: every error body is
/// `{"error": message}`. Store errors are logged here and surface with a
/// generic message only.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] ServiceError);

impl ApiError {
    pub fn bad_request(msg: &str) -> Self {
        Self(ServiceError::Validation(msg.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Db(e) => {
                error!(error = ?e, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let msg = self.0.public_message().to_string();
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
