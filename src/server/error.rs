use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Message returned when a create request carries a blank field.
pub const MISSING_FIELDS: &str = "Username and content are required";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("message not found: {0}")]
    MessageNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MessageNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
