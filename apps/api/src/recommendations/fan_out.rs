//! Detail Fan-Out — the coordination core.
//!
//! For each candidate, the summary and roadmap sub-requests run concurrently;
//! all candidates run concurrently with each other (up to 2N calls in flight),
//! so end-to-end latency tracks the slowest single pair rather than the sum.
//! Results are collected positionally: output order always matches input
//! order regardless of completion order.
//!
//! Failure isolation: either sub-request failing (including a timeout)
//! degrades that one candidate to the fixed fallback summary and an empty
//! roadmap. The failure is logged, never propagated. One candidate's failure
//! cannot affect another's, and this stage cannot fail the overall request.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::warn;

use crate::engine::CareerEngine;
use crate::models::career::{CareerPathCandidate, DetailedCareerPath, Profile};

/// Fixed fallback summary used when a candidate's detail pair fails.
pub const FALLBACK_SUMMARY: &str =
    "Could not generate a skill alignment summary for this career path right now. \
     Select it again in a moment to retry.";

/// Bound on each detail sub-call so a stalled external cannot pin a
/// candidate's pair forever. A timeout degrades exactly like any other
/// sub-request failure.
const DETAIL_CALL_TIMEOUT: Duration = Duration::from_secs(45);

/// Enriches every candidate independently and concurrently.
pub async fn enrich_candidates(
    engine: &dyn CareerEngine,
    profile: &Profile,
    candidates: &[CareerPathCandidate],
) -> Vec<DetailedCareerPath> {
    join_all(
        candidates
            .iter()
            .map(|candidate| enrich_candidate(engine, profile, candidate)),
    )
    .await
}

/// Runs one candidate's summary and roadmap sub-requests concurrently and
/// assembles its `DetailedCareerPath`, degrading on any sub-failure.
pub async fn enrich_candidate(
    engine: &dyn CareerEngine,
    profile: &Profile,
    candidate: &CareerPathCandidate,
) -> DetailedCareerPath {
    let background_details = format!(
        "Academic background: {}. Interests: {}.",
        profile.academic_background, profile.interests
    );

    let summary_call = timeout(
        DETAIL_CALL_TIMEOUT,
        engine.generate_summary(&profile.skills, &candidate.job_title, &background_details),
    );
    let roadmap_call = timeout(
        DETAIL_CALL_TIMEOUT,
        engine.generate_roadmap(profile, &candidate.job_title),
    );

    let (summary, roadmap) = tokio::join!(summary_call, roadmap_call);

    let pair = match (summary, roadmap) {
        (Ok(Ok(summary)), Ok(Ok(plan))) => Ok((summary, plan)),
        (Err(_), _) | (_, Err(_)) => Err(format!(
            "timed out after {}s",
            DETAIL_CALL_TIMEOUT.as_secs()
        )),
        (Ok(Err(e)), _) => Err(e.to_string()),
        (_, Ok(Err(e))) => Err(e.to_string()),
    };

    match pair {
        Ok((summary, plan)) => DetailedCareerPath {
            candidate: candidate.clone(),
            summary,
            roadmap: plan.roadmap,
            next_steps: plan.next_steps,
            learning_resources: plan.learning_resources,
        },
        Err(reason) => {
            warn!(
                "Detail generation for '{}' degraded: {}",
                candidate.job_title, reason
            );
            DetailedCareerPath {
                candidate: candidate.clone(),
                summary: FALLBACK_SUMMARY.to_string(),
                roadmap: vec![],
                next_steps: vec![],
                learning_resources: vec![],
            }
        }
    }
}
