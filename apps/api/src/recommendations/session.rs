//! Session store — explicit owner of the per-session detail cache.
//!
//! One `Session` lives from the completion of a recommendation pipeline until
//! the client resets it. Its `details` map memoizes completed
//! `DetailedCareerPath` values by job title so re-selecting a candidate never
//! re-issues external calls. The cache is never invalidated within a session;
//! racing re-selections of one title may both fetch, and the later write wins
//! (the call is idempotent, so the values are equivalent).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::career::{CareerPathCandidate, DetailedCareerPath, Profile};

pub struct Session {
    pub profile: Profile,
    pub candidates: Vec<CareerPathCandidate>,
    pub details: HashMap<String, DetailedCareerPath>,
    /// Reserved for a future idle-session expiry sweep.
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from a completed pipeline run and returns its id.
    pub async fn create(
        &self,
        profile: Profile,
        candidates: Vec<CareerPathCandidate>,
        details: Vec<DetailedCareerPath>,
    ) -> Uuid {
        let details = details
            .into_iter()
            .map(|d| (d.job_title().to_string(), d))
            .collect();
        let session = Session {
            profile,
            candidates,
            details,
            created_at: Utc::now(),
        };

        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, session);
        id
    }

    pub async fn profile(&self, id: Uuid) -> Option<Profile> {
        self.inner.read().await.get(&id).map(|s| s.profile.clone())
    }

    pub async fn candidate(&self, id: Uuid, job_title: &str) -> Option<CareerPathCandidate> {
        self.inner
            .read()
            .await
            .get(&id)?
            .candidates
            .iter()
            .find(|c| c.job_title == job_title)
            .cloned()
    }

    pub async fn cached_detail(&self, id: Uuid, job_title: &str) -> Option<DetailedCareerPath> {
        self.inner
            .read()
            .await
            .get(&id)?
            .details
            .get(job_title)
            .cloned()
    }

    /// The session's detailed paths in candidate order. Degraded entries are
    /// included; a candidate with no cached detail yet is skipped.
    pub async fn ordered_paths(&self, id: Uuid) -> Option<Vec<DetailedCareerPath>> {
        let guard = self.inner.read().await;
        let session = guard.get(&id)?;
        Some(
            session
                .candidates
                .iter()
                .filter_map(|c| session.details.get(&c.job_title).cloned())
                .collect(),
        )
    }

    /// Memoizes a completed detail. Last write wins.
    pub async fn insert_detail(&self, id: Uuid, detail: DetailedCareerPath) -> bool {
        let mut guard = self.inner.write().await;
        match guard.get_mut(&id) {
            Some(session) => {
                session
                    .details
                    .insert(detail.job_title().to_string(), detail);
                true
            }
            None => false,
        }
    }

    /// Discards a session and its cache. Returns false for unknown ids.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::fan_out::FALLBACK_SUMMARY;
    use crate::recommendations::test_support::{candidates, profile};

    fn detail(job_title: &str, summary: &str) -> DetailedCareerPath {
        DetailedCareerPath {
            candidate: CareerPathCandidate {
                job_title: job_title.to_string(),
                industry: "Tech".to_string(),
                confidence_score: 0.8,
            },
            summary: summary.to_string(),
            roadmap: vec![],
            next_steps: vec![],
            learning_resources: vec![],
        }
    }

    #[tokio::test]
    async fn test_ordered_paths_follow_candidate_order() {
        let store = SessionStore::new();
        let input = candidates(&["A", "B", "C"]);
        let details = vec![detail("C", "c"), detail("A", "a"), detail("B", "b")];

        let id = store.create(profile(), input, details).await;
        let paths = store.ordered_paths(id).await.unwrap();

        let titles: Vec<&str> = paths.iter().map(|p| p.job_title()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_insert_detail_is_last_write_wins() {
        let store = SessionStore::new();
        let id = store.create(profile(), candidates(&["A"]), vec![]).await;

        assert!(store.insert_detail(id, detail("A", FALLBACK_SUMMARY)).await);
        assert!(store.insert_detail(id, detail("A", "fresh summary")).await);

        let cached = store.cached_detail(id, "A").await.unwrap();
        assert_eq!(cached.summary, "fresh summary");
    }

    #[tokio::test]
    async fn test_remove_discards_the_cache() {
        let store = SessionStore::new();
        let id = store
            .create(profile(), candidates(&["A"]), vec![detail("A", "a")])
            .await;

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.cached_detail(id, "A").await.is_none());
    }
}
