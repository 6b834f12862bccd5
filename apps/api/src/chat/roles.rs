//! Role translation at the chat integration boundary.
//!
//! The application's local vocabulary is `user` / `assistant`; the wire
//! vocabulary is `user` / `model` and accepts exactly those two labels.
//! Anything else fails loudly here rather than passing through silently.

use crate::errors::AppError;
use crate::llm_client::{WIRE_ROLE_MODEL, WIRE_ROLE_USER};

pub const LOCAL_ROLE_USER: &str = "user";
pub const LOCAL_ROLE_ASSISTANT: &str = "assistant";

/// Exhaustive local-to-wire role mapping.
pub fn to_wire_role(role: &str) -> Result<&'static str, AppError> {
    match role {
        LOCAL_ROLE_USER => Ok(WIRE_ROLE_USER),
        LOCAL_ROLE_ASSISTANT => Ok(WIRE_ROLE_MODEL),
        other => Err(AppError::UnsupportedRole(other.to_string())),
    }
}
