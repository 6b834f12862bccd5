//! Career recommendation pipeline — orchestrates the full flow.
//!
//! Flow: unify profile → request candidates → detail fan-out → create session.
//!
//! Only the unifier's validation and the single recommendation step may abort
//! the request. An empty candidate list is the "no matches" outcome and flows
//! through as an empty result, not an error.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::engine::CareerEngine;
use crate::errors::AppError;
use crate::intake::unifier::{unify_profile, ProfileInput};
use crate::models::career::{DetailedCareerPath, Profile};
use crate::recommendations::fan_out::{enrich_candidate, enrich_candidates};
use crate::recommendations::requestor::request_candidates;
use crate::recommendations::session::SessionStore;

/// Aggregate result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub session_id: Uuid,
    pub profile: Profile,
    pub paths: Vec<DetailedCareerPath>,
}

/// Runs the full pipeline and registers the resulting session.
pub async fn generate_career_paths(
    engine: &dyn CareerEngine,
    sessions: &SessionStore,
    input: ProfileInput,
) -> Result<RecommendationResponse, AppError> {
    let profile = unify_profile(engine, input).await?;

    info!("Requesting career recommendations");
    let candidates = request_candidates(engine, &profile).await?;

    if candidates.is_empty() {
        info!("Recommendation step returned no matches");
    } else {
        info!("Enriching {} candidates", candidates.len());
    }

    let paths = enrich_candidates(engine, &profile, &candidates).await;

    let session_id = sessions
        .create(profile.clone(), candidates, paths.clone())
        .await;
    info!("Created session {session_id} with {} paths", paths.len());

    Ok(RecommendationResponse {
        session_id,
        profile,
        paths,
    })
}

/// Cache-first detail lookup for one candidate within a session.
///
/// A cached title never re-issues external calls. On a miss for a known
/// candidate, a single pair is re-enriched and memoized last-write-wins;
/// two racing selections of one title are tolerated by design.
pub async fn detail_for(
    engine: &dyn CareerEngine,
    sessions: &SessionStore,
    session_id: Uuid,
    job_title: &str,
) -> Result<DetailedCareerPath, AppError> {
    if let Some(detail) = sessions.cached_detail(session_id, job_title).await {
        return Ok(detail);
    }

    let profile = sessions
        .profile(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    let candidate = sessions
        .candidate(session_id, job_title)
        .await
        .ok_or_else(|| {
            AppError::NotFound(format!("No candidate '{job_title}' in this session"))
        })?;

    let detail = enrich_candidate(engine, &profile, &candidate).await;
    sessions.insert_detail(session_id, detail.clone()).await;
    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::models::career::CareerPathCandidate;
    use crate::recommendations::fan_out::FALLBACK_SUMMARY;
    use crate::recommendations::test_support::{candidates, profile, ScriptedEngine};

    fn manual_input() -> ProfileInput {
        ProfileInput {
            skills: Some("Python, SQL".to_string()),
            academic_background: Some("B.Sc CS".to_string()),
            interests: Some("data, puzzles".to_string()),
            contact_email: Some("a@b.com".to_string()),
            resume_text: None,
        }
    }

    #[tokio::test]
    async fn test_single_candidate_end_to_end() {
        let engine = ScriptedEngine::with_candidates(vec![CareerPathCandidate {
            job_title: "Data Analyst".to_string(),
            industry: "Tech".to_string(),
            confidence_score: 0.8,
        }]);
        let sessions = SessionStore::new();

        let response = generate_career_paths(&engine, &sessions, manual_input())
            .await
            .unwrap();

        assert_eq!(response.paths.len(), 1);
        let path = &response.paths[0];
        assert_eq!(path.job_title(), "Data Analyst");
        assert_ne!(path.summary, FALLBACK_SUMMARY);
        assert!(!path.summary.is_empty());
        assert!(!path.roadmap.is_empty());

        // The session now serves the aggregate without further calls.
        let stored = sessions.ordered_paths(response.session_id).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_no_candidates_is_no_matches_not_an_error() {
        let engine = ScriptedEngine::with_candidates(vec![]);
        let sessions = SessionStore::new();

        let response = generate_career_paths(&engine, &sessions, manual_input())
            .await
            .unwrap();

        assert!(response.paths.is_empty());
        assert_eq!(engine.recommendation_calls.load(Ordering::SeqCst), 1);
        assert_eq!(engine.summary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_overloaded_recommendation_surfaces_friendly_kind() {
        let engine = ScriptedEngine::overloaded();
        let sessions = SessionStore::new();

        let err = generate_career_paths(&engine, &sessions, manual_input())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ServiceOverloaded));
    }

    #[tokio::test]
    async fn test_repeated_selection_hits_the_cache() {
        let engine = ScriptedEngine::default();
        let sessions = SessionStore::new();
        // Session with a known candidate but a cold cache.
        let id = sessions
            .create(profile(), candidates(&["Data Analyst"]), vec![])
            .await;

        let first = detail_for(&engine, &sessions, id, "Data Analyst")
            .await
            .unwrap();
        let second = detail_for(&engine, &sessions, id, "Data Analyst")
            .await
            .unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(engine.summary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(engine.roadmap_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_candidate_is_not_found() {
        let engine = ScriptedEngine::default();
        let sessions = SessionStore::new();
        let id = sessions
            .create(profile(), candidates(&["Data Analyst"]), vec![])
            .await;

        let err = detail_for(&engine, &sessions, id, "Astronaut")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
