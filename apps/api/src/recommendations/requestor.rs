//! Recommendation Requestor — wraps the single external call that maps a
//! Profile to an ordered candidate sequence.
//!
//! An empty sequence is a valid "no match" outcome. A failed call aborts the
//! whole pipeline, since there is nothing to fan out over, so the error
//! propagates, with overload conditions kept distinguishable for a try-again
//! affordance. No retries happen at this layer.

use tracing::warn;

use crate::engine::CareerEngine;
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::career::{CareerPathCandidate, Profile};

pub async fn request_candidates(
    engine: &dyn CareerEngine,
    profile: &Profile,
) -> Result<Vec<CareerPathCandidate>, AppError> {
    let candidates = engine
        .generate_recommendations(profile)
        .await
        .map_err(classify_recommendation_error)?;

    Ok(sanitize_candidates(candidates))
}

/// Maps a recommendation-capability failure into the user-facing taxonomy.
pub fn classify_recommendation_error(e: LlmError) -> AppError {
    if e.is_overloaded() {
        AppError::ServiceOverloaded
    } else {
        AppError::RecommendationUnavailable(e.to_string())
    }
}

/// Drops unusable candidates and clamps advisory scores into [0, 1].
/// Ordering is preserved; it is advisory, never an invariant.
fn sanitize_candidates(raw: Vec<CareerPathCandidate>) -> Vec<CareerPathCandidate> {
    raw.into_iter()
        .filter_map(|mut c| {
            if c.job_title.trim().is_empty() {
                warn!("Dropping candidate with empty job title");
                return None;
            }
            if !c.confidence_score.is_finite() {
                warn!(
                    "Dropping candidate '{}' with non-finite confidence score",
                    c.job_title
                );
                return None;
            }
            if !(0.0..=1.0).contains(&c.confidence_score) {
                warn!(
                    "Clamping out-of-range confidence score {} for '{}'",
                    c.confidence_score, c.job_title
                );
                c.confidence_score = c.confidence_score.clamp(0.0, 1.0);
            }
            Some(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::test_support::ScriptedEngine;

    fn profile() -> Profile {
        Profile {
            skills: "Python, SQL".to_string(),
            academic_background: "B.Sc CS".to_string(),
            interests: "data, puzzles".to_string(),
            contact_email: "a@b.com".to_string(),
        }
    }

    fn candidate(job_title: &str, score: f64) -> CareerPathCandidate {
        CareerPathCandidate {
            job_title: job_title.to_string(),
            industry: "Tech".to_string(),
            confidence_score: score,
        }
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_a_valid_no_match_outcome() {
        let engine = ScriptedEngine::with_candidates(vec![]);
        let candidates = request_candidates(&engine, &profile()).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_propagates_as_recommendation_error() {
        let engine = ScriptedEngine::unreachable();
        let err = request_candidates(&engine, &profile()).await.unwrap_err();
        assert!(matches!(err, AppError::RecommendationUnavailable(_)));
    }

    #[tokio::test]
    async fn test_overload_text_is_classified_as_service_overloaded() {
        // The stub raises a plain API error whose text carries the overload
        // signal; classification must inspect the text, not just the variant.
        let engine = ScriptedEngine::overloaded();
        let err = request_candidates(&engine, &profile()).await.unwrap_err();
        assert!(matches!(err, AppError::ServiceOverloaded));
    }

    #[test]
    fn test_sanitize_drops_non_finite_and_clamps_range() {
        let sanitized = sanitize_candidates(vec![
            candidate("Data Analyst", 0.8),
            candidate("Broken", f64::NAN),
            candidate("Over Eager", 1.7),
            candidate("", 0.5),
        ]);

        assert_eq!(sanitized.len(), 2);
        assert_eq!(sanitized[0].job_title, "Data Analyst");
        assert_eq!(sanitized[1].job_title, "Over Eager");
        assert!((sanitized[1].confidence_score - 1.0).abs() < f64::EPSILON);
    }
}
