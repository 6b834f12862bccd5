//! Production `CareerEngine` backed by the Gemini client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::chat::prompts::CHAT_SYSTEM_TEMPLATE;
use crate::engine::CareerEngine;
use crate::intake::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::llm_client::prompts::CAREER_ADVISOR_PERSONA;
use crate::llm_client::{ChatTurn, GeminiClient, LlmError, WIRE_ROLE_USER};
use crate::models::career::{CareerPathCandidate, ExtractedProfile, Profile, RoadmapPlan};
use crate::recommendations::prompts::{
    RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM, ROADMAP_PROMPT_TEMPLATE,
    ROADMAP_SYSTEM, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary: String,
}

#[derive(Clone)]
pub struct GeminiEngine {
    llm: GeminiClient,
}

impl GeminiEngine {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerEngine for GeminiEngine {
    async fn extract_profile(&self, resume_text: &str) -> Result<ExtractedProfile, LlmError> {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        self.llm
            .call_json::<ExtractedProfile>(&prompt, EXTRACTION_SYSTEM)
            .await
    }

    async fn generate_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<CareerPathCandidate>, LlmError> {
        let prompt = RECOMMENDATION_PROMPT_TEMPLATE
            .replace("{skills}", &profile.skills)
            .replace("{academic_background}", &profile.academic_background)
            .replace("{interests}", &profile.interests);

        let candidates = self
            .llm
            .call_json::<Vec<CareerPathCandidate>>(&prompt, RECOMMENDATION_SYSTEM)
            .await?;

        debug!("Recommendation call returned {} candidates", candidates.len());
        Ok(candidates)
    }

    async fn generate_summary(
        &self,
        skills: &str,
        career_path: &str,
        background_details: &str,
    ) -> Result<String, LlmError> {
        let prompt = SUMMARY_PROMPT_TEMPLATE
            .replace("{skills}", skills)
            .replace("{career_path}", career_path)
            .replace("{background_details}", background_details);

        let payload = self
            .llm
            .call_json::<SummaryPayload>(&prompt, SUMMARY_SYSTEM)
            .await?;
        Ok(payload.summary)
    }

    async fn generate_roadmap(
        &self,
        profile: &Profile,
        job_title: &str,
    ) -> Result<RoadmapPlan, LlmError> {
        let prompt = ROADMAP_PROMPT_TEMPLATE
            .replace("{skills}", &profile.skills)
            .replace("{academic_background}", &profile.academic_background)
            .replace("{interests}", &profile.interests)
            .replace("{job_title}", job_title);

        self.llm
            .call_json::<RoadmapPlan>(&prompt, ROADMAP_SYSTEM)
            .await
    }

    async fn converse(&self, history: &[ChatTurn], new_message: &str) -> Result<String, LlmError> {
        let mut turns = history.to_vec();
        turns.push(ChatTurn {
            role: WIRE_ROLE_USER,
            text: new_message.to_string(),
        });
        let system = CHAT_SYSTEM_TEMPLATE.replace("{persona}", CAREER_ADVISOR_PERSONA);
        self.llm.converse(&turns, &system).await
    }
}
