pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::intake::handlers as intake_handlers;
use crate::recommendations::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile intake
        .route(
            "/api/v1/profile/extract",
            post(intake_handlers::handle_extract_resume),
        )
        // Recommendation pipeline + session cache
        .route(
            "/api/v1/recommendations",
            post(recommendation_handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/:session_id",
            get(recommendation_handlers::handle_get_paths)
                .delete(recommendation_handlers::handle_reset_session),
        )
        .route(
            "/api/v1/recommendations/:session_id/paths/:job_title",
            get(recommendation_handlers::handle_get_detail),
        )
        // Chat assistant
        .route("/api/v1/chat", post(chat_handlers::handle_chat))
        .with_state(state)
}
