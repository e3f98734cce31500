use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lanscout_domain::DomainError;
use serde_json::json;
use tracing::{error, warn};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            e if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()),
            e if e.is_invalid_input() => (StatusCode::BAD_REQUEST, e.to_string()),
            e if e.is_ambiguous_topology() => (StatusCode::CONFLICT, e.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
