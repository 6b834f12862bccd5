//! Scripted `CareerEngine` stubs shared by the recommendation-pipeline tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::engine::CareerEngine;
use crate::llm_client::{ChatTurn, LlmError};
use crate::models::career::{
    CareerPathCandidate, ExtractedProfile, Profile, RoadmapPlan, RoadmapStage,
};

pub(crate) fn profile() -> Profile {
    Profile {
        skills: "Python, SQL".to_string(),
        academic_background: "B.Sc CS".to_string(),
        interests: "data, puzzles".to_string(),
        contact_email: "a@b.com".to_string(),
    }
}

pub(crate) fn candidates(titles: &[&str]) -> Vec<CareerPathCandidate> {
    titles
        .iter()
        .map(|t| CareerPathCandidate {
            job_title: t.to_string(),
            industry: "Tech".to_string(),
            confidence_score: 0.8,
        })
        .collect()
}

enum RecommendationScript {
    Candidates(Vec<CareerPathCandidate>),
    Unreachable,
    OverloadedText,
}

/// Configurable engine stub: scripted recommendation outcome, per-title detail
/// failures, optional artificial latency, and call counters.
pub(crate) struct ScriptedEngine {
    script: RecommendationScript,
    failing_titles: HashSet<String>,
    call_delay: Option<Duration>,
    pub recommendation_calls: AtomicUsize,
    pub summary_calls: AtomicUsize,
    pub roadmap_calls: AtomicUsize,
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::with_candidates(vec![])
    }
}

impl ScriptedEngine {
    pub fn with_candidates(candidates: Vec<CareerPathCandidate>) -> Self {
        Self {
            script: RecommendationScript::Candidates(candidates),
            failing_titles: HashSet::new(),
            call_delay: None,
            recommendation_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
            roadmap_calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            script: RecommendationScript::Unreachable,
            ..Self::default()
        }
    }

    /// Fails with a plain API error whose text carries the overload signal.
    pub fn overloaded() -> Self {
        Self {
            script: RecommendationScript::OverloadedText,
            ..Self::default()
        }
    }

    /// Summary and roadmap calls fail for the given job titles.
    pub fn failing_for(mut self, titles: &[&str]) -> Self {
        self.failing_titles = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Every summary/roadmap call sleeps this long before resolving.
    pub fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = Some(delay);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.call_delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn detail_outcome(&self, job_title: &str, what: &str) -> Result<(), LlmError> {
        if self.failing_titles.contains(job_title) {
            return Err(LlmError::Api {
                status: 500,
                message: format!("{what} generation failed"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CareerEngine for ScriptedEngine {
    async fn extract_profile(&self, _resume_text: &str) -> Result<ExtractedProfile, LlmError> {
        Ok(ExtractedProfile {
            skills: "Extracted skills".to_string(),
            academic_background: "Extracted background".to_string(),
        })
    }

    async fn generate_recommendations(
        &self,
        _profile: &Profile,
    ) -> Result<Vec<CareerPathCandidate>, LlmError> {
        self.recommendation_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            RecommendationScript::Candidates(candidates) => Ok(candidates.clone()),
            RecommendationScript::Unreachable => Err(LlmError::Api {
                status: 500,
                message: "connection refused".to_string(),
            }),
            RecommendationScript::OverloadedText => Err(LlmError::Api {
                status: 500,
                message: "The model is overloaded. Please try again later.".to_string(),
            }),
        }
    }

    async fn generate_summary(
        &self,
        skills: &str,
        career_path: &str,
        _background_details: &str,
    ) -> Result<String, LlmError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.detail_outcome(career_path, "summary")?;
        Ok(format!(
            "Tailored summary for {career_path} building on {skills}"
        ))
    }

    async fn generate_roadmap(
        &self,
        _profile: &Profile,
        job_title: &str,
    ) -> Result<RoadmapPlan, LlmError> {
        self.roadmap_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.detail_outcome(job_title, "roadmap")?;
        Ok(RoadmapPlan {
            roadmap: vec![RoadmapStage {
                title: "Foundations".to_string(),
                duration: "0-6 months".to_string(),
                description: format!("Build the fundamentals for {job_title}"),
                tasks: vec![
                    "Take an intro course".to_string(),
                    "Build a portfolio project".to_string(),
                ],
            }],
            next_steps: vec!["Update your resume".to_string()],
            learning_resources: vec!["An online course".to_string()],
        })
    }

    async fn converse(
        &self,
        _history: &[ChatTurn],
        _new_message: &str,
    ) -> Result<String, LlmError> {
        Ok("scripted reply".to_string())
    }
}
