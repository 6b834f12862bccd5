//! Chat Responder — canned answers first, generative fallback second.
//!
//! A generative failure is caught and suppressed: the chat surface must never
//! crash, so the caller sees "no reply" rather than an error. The failure is
//! still logged server-side.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chat::canned::{canned_answer, CANNED_REPLY_DELAY};
use crate::chat::roles::to_wire_role;
use crate::engine::CareerEngine;
use crate::errors::AppError;
use crate::llm_client::ChatTurn;

/// Only the most recent turns are forwarded to the generative backend.
pub const HISTORY_WINDOW: usize = 10;

/// One turn of the conversation in the application's local role vocabulary
/// (`user` / `assistant`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub text: String,
}

/// Answers a chat message. `Ok(None)` means the generative fallback failed
/// and the caller should append nothing.
pub async fn respond(
    engine: &dyn CareerEngine,
    history: &[ChatMessage],
    message: &str,
) -> Result<Option<String>, AppError> {
    if let Some(answer) = canned_answer(message) {
        tokio::time::sleep(CANNED_REPLY_DELAY).await;
        return Ok(Some(answer.to_string()));
    }

    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut turns = Vec::with_capacity(history.len() - window_start);
    for m in &history[window_start..] {
        turns.push(ChatTurn {
            role: to_wire_role(&m.role)?,
            text: m.text.clone(),
        });
    }

    match engine.converse(&turns, message).await {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            warn!("Chat generation failed (suppressed): {e}");
            Ok(None)
        }
    }
}
