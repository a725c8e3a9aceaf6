use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::Utc;

use crate::common::{ChatMessage, CreateMessageRequest, HealthResponse};

use super::error::{ApiError, MISSING_FIELDS};
use super::{MESSAGES_PATH, ServerState};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn list_messages(State(st): State<ServerState>) -> Json<Vec<ChatMessage>> {
    Json(st.store.list())
}

pub async fn get_message(
    State(st): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ChatMessage>, ApiError> {
    st.store
        .find(&id)
        .map(Json)
        .ok_or(ApiError::MessageNotFound(id))
}

pub async fn create_message(
    State(st): State<ServerState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    validate(&request)?;

    let message = st.store.append(request.username, request.content);
    log::info!("Message {} created by {}", message.id, message.username);

    let location = format!("{MESSAGES_PATH}/{}", message.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(message),
    ))
}

pub async fn clear_messages(State(st): State<ServerState>) -> StatusCode {
    let removed = st.store.clear();
    log::info!("Cleared {removed} messages");
    StatusCode::NO_CONTENT
}

/// Both fields must contain something other than whitespace.
pub fn validate(request: &CreateMessageRequest) -> Result<(), ApiError> {
    if request.username.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::Validation(MISSING_FIELDS.to_string()));
    }
    Ok(())
}
