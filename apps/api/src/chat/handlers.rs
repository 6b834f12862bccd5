//! Axum route handler for the chat assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::responder::{respond, ChatMessage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// `null` when the generative fallback failed. The client appends
    /// nothing rather than showing an error.
    pub reply: Option<String>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = respond(state.engine.as_ref(), &request.history, &request.message).await?;
    Ok(Json(ChatResponse { reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults_history() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();
        assert!(request.history.is_empty());
        assert_eq!(request.message, "Hello");
    }

    #[test]
    fn test_chat_response_serializes_null_reply() {
        let json = serde_json::to_string(&ChatResponse { reply: None }).unwrap();
        assert_eq!(json, r#"{"reply":null}"#);
    }
}
