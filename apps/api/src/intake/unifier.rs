//! Profile Unifier — normalizes the two possible input shapes (manual fields
//! vs. resume text) into one `Profile`.
//!
//! When resume text is supplied, the extraction capability's output
//! unconditionally replaces any manually entered skills and academic
//! background, even if both were present.

use serde::Deserialize;
use tracing::info;

use crate::engine::CareerEngine;
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::career::Profile;

/// Raw submission from the intake form. Either the three manual fields or
/// `resume_text` plus interests must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub academic_background: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// Builds a validated `Profile` from a raw submission.
///
/// Fails with `Validation` when interests are empty, or when no resume is
/// supplied and either manual field is empty. With a resume, both extracted
/// fields must come back populated before the profile is considered valid.
pub async fn unify_profile(
    engine: &dyn CareerEngine,
    input: ProfileInput,
) -> Result<Profile, AppError> {
    let interests = trimmed(&input.interests);
    if interests.is_empty() {
        return Err(AppError::Validation(
            "interests are required and cannot be empty".to_string(),
        ));
    }

    let contact_email = trimmed(&input.contact_email);
    let resume_text = trimmed(&input.resume_text);

    if !resume_text.is_empty() {
        let extracted = engine
            .extract_profile(&resume_text)
            .await
            .map_err(map_extraction_error)?;

        // Extraction must populate both fields before the profile is valid.
        if extracted.skills.trim().is_empty() || extracted.academic_background.trim().is_empty() {
            return Err(AppError::Validation(
                "The resume did not contain enough information to determine \
                 skills and academic background"
                    .to_string(),
            ));
        }

        info!("Profile unified from resume extraction");
        return Ok(Profile {
            skills: extracted.skills,
            academic_background: extracted.academic_background,
            interests,
            contact_email,
        });
    }

    let skills = trimmed(&input.skills);
    let academic_background = trimmed(&input.academic_background);
    if skills.is_empty() || academic_background.is_empty() {
        return Err(AppError::Validation(
            "skills and academic background are required when no resume is provided".to_string(),
        ));
    }

    Ok(Profile {
        skills,
        academic_background,
        interests,
        contact_email,
    })
}

/// Maps an extraction-capability failure into the user-facing taxonomy.
/// Overload conditions keep their distinguished kind so the caller can offer
/// a try-again affordance.
pub fn map_extraction_error(e: LlmError) -> AppError {
    if e.is_overloaded() {
        AppError::ServiceOverloaded
    } else {
        AppError::Llm(format!("Resume extraction failed: {e}"))
    }
}

fn trimmed(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::llm_client::ChatTurn;
    use crate::models::career::{CareerPathCandidate, ExtractedProfile, RoadmapPlan};

    /// Extraction-only stub; the other capabilities are never reached here.
    struct StubExtractor {
        skills: &'static str,
        academic_background: &'static str,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubExtractor {
        fn new(skills: &'static str, academic_background: &'static str) -> Self {
            Self {
                skills,
                academic_background,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new("", "")
            }
        }
    }

    #[async_trait]
    impl CareerEngine for StubExtractor {
        async fn extract_profile(&self, _resume_text: &str) -> Result<ExtractedProfile, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(ExtractedProfile {
                skills: self.skills.to_string(),
                academic_background: self.academic_background.to_string(),
            })
        }

        async fn generate_recommendations(
            &self,
            _profile: &Profile,
        ) -> Result<Vec<CareerPathCandidate>, LlmError> {
            Err(LlmError::EmptyContent)
        }

        async fn generate_summary(
            &self,
            _skills: &str,
            _career_path: &str,
            _background_details: &str,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }

        async fn generate_roadmap(
            &self,
            _profile: &Profile,
            _job_title: &str,
        ) -> Result<RoadmapPlan, LlmError> {
            Err(LlmError::EmptyContent)
        }

        async fn converse(
            &self,
            _history: &[ChatTurn],
            _new_message: &str,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

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
    async fn test_valid_manual_profile_passes_through_unchanged() {
        let engine = StubExtractor::new("ignored", "ignored");
        let profile = unify_profile(&engine, manual_input()).await.unwrap();

        assert_eq!(profile.skills, "Python, SQL");
        assert_eq!(profile.academic_background, "B.Sc CS");
        assert_eq!(profile.interests, "data, puzzles");
        assert_eq!(profile.contact_email, "a@b.com");
        // No resume means no extraction call.
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_interests_fails_regardless_of_other_fields() {
        let engine = StubExtractor::new("Rust", "M.Sc");
        let input = ProfileInput {
            interests: Some("   ".to_string()),
            resume_text: Some("a perfectly fine resume".to_string()),
            ..manual_input()
        };

        let err = unify_profile(&engine, input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_skills_without_resume_fails() {
        let engine = StubExtractor::new("", "");
        let input = ProfileInput {
            skills: None,
            ..manual_input()
        };

        let err = unify_profile(&engine, input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_resume_extraction_overrides_manual_fields() {
        let engine = StubExtractor::new("Rust, Kubernetes", "Ph.D. Physics");
        let input = ProfileInput {
            resume_text: Some("...resume body...".to_string()),
            ..manual_input() // manual skills/background supplied AND ignored
        };

        let profile = unify_profile(&engine, input).await.unwrap();
        assert_eq!(profile.skills, "Rust, Kubernetes");
        assert_eq!(profile.academic_background, "Ph.D. Physics");
        assert_eq!(profile.interests, "data, puzzles");
        assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_extraction_returning_empty_field_is_invalid() {
        let engine = StubExtractor::new("Rust", "   ");
        let input = ProfileInput {
            resume_text: Some("sparse resume".to_string()),
            ..manual_input()
        };

        let err = unify_profile(&engine, input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extraction_failure_maps_to_llm_error() {
        let engine = StubExtractor::failing();
        let input = ProfileInput {
            resume_text: Some("resume".to_string()),
            ..manual_input()
        };

        let err = unify_profile(&engine, input).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_overloaded_extraction_keeps_its_distinguished_kind() {
        let err = map_extraction_error(LlmError::Overloaded {
            status: 503,
            message: "The model is overloaded".to_string(),
        });
        assert!(matches!(err, AppError::ServiceOverloaded));
    }
}
