//! Career engine — the capability seam between orchestration and the
//! generative backend.
//!
//! The orchestration layers (intake, recommendations, chat) only ever see
//! `dyn CareerEngine`; the production implementation prompts Gemini, tests
//! substitute scripted stubs.

pub mod gemini;

use async_trait::async_trait;

use crate::llm_client::{ChatTurn, LlmError};
use crate::models::career::{CareerPathCandidate, ExtractedProfile, Profile, RoadmapPlan};

pub use gemini::GeminiEngine;

/// The five external capabilities consumed by the pipeline, as one seam.
#[async_trait]
pub trait CareerEngine: Send + Sync {
    /// Converts raw resume text into the same shape as manual profile entry.
    async fn extract_profile(&self, resume_text: &str) -> Result<ExtractedProfile, LlmError>;

    /// Maps a unified profile to an ordered sequence of candidates.
    /// An empty sequence is a valid "no match" outcome, not an error.
    async fn generate_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<CareerPathCandidate>, LlmError>;

    /// Produces a tailored skills/experience summary for one career path.
    async fn generate_summary(
        &self,
        skills: &str,
        career_path: &str,
        background_details: &str,
    ) -> Result<String, LlmError>;

    /// Produces the staged roadmap (plus next steps and learning resources)
    /// for one job title.
    async fn generate_roadmap(
        &self,
        profile: &Profile,
        job_title: &str,
    ) -> Result<RoadmapPlan, LlmError>;

    /// Conversational fallback for the chat assistant. `history` must already
    /// carry wire role labels; `new_message` is appended as the final user turn.
    async fn converse(&self, history: &[ChatTurn], new_message: &str) -> Result<String, LlmError>;
}
