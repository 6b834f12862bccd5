use serde::{Deserialize, Serialize};

/// Unified user input: skills, academic background, interests, contact email.
///
/// Constructed once per submission by the profile unifier and immutable
/// afterwards. Lives only for the duration of one request/session; nothing
/// here is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub skills: String,
    pub academic_background: String,
    pub interests: String,
    pub contact_email: String,
}

/// Output of the resume-extraction capability. Both fields replace any
/// manually entered values when a resume is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub skills: String,
    pub academic_background: String,
}

/// A single AI-suggested career path, pre-enrichment.
///
/// Candidates arrive as an ordered sequence; the order reflects relevance but
/// is advisory only. The generator does not contractually sort by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathCandidate {
    pub job_title: String,
    pub industry: String,
    pub confidence_score: f64,
}

/// One chronological phase of a career roadmap.
/// Stages are ordered by convention of the generating prompt; `tasks` is
/// expected to hold 2-4 items but this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub title: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Full output of one roadmap-generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapPlan {
    #[serde(default)]
    pub roadmap: Vec<RoadmapStage>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub learning_resources: Vec<String>,
}

/// A candidate enriched with a tailored summary and a roadmap.
///
/// `summary` and `roadmap` are always present: on a detail-generation failure
/// they hold the fixed fallback text and an empty sequence, never go missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedCareerPath {
    #[serde(flatten)]
    pub candidate: CareerPathCandidate,
    pub summary: String,
    pub roadmap: Vec<RoadmapStage>,
    pub next_steps: Vec<String>,
    pub learning_resources: Vec<String>,
}

impl DetailedCareerPath {
    pub fn job_title(&self) -> &str {
        &self.candidate.job_title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_from_engine_payload() {
        let json = r#"{
            "job_title": "Data Analyst",
            "industry": "Tech",
            "confidence_score": 0.8
        }"#;
        let candidate: CareerPathCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.job_title, "Data Analyst");
        assert_eq!(candidate.industry, "Tech");
        assert!((candidate.confidence_score - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roadmap_plan_defaults_missing_sequences() {
        let json = r#"{
            "roadmap": [
                {
                    "title": "Foundations",
                    "duration": "0-6 months",
                    "description": "Learn the basics",
                    "tasks": ["Take an intro course", "Build a small project"]
                }
            ]
        }"#;
        let plan: RoadmapPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.roadmap.len(), 1);
        assert_eq!(plan.roadmap[0].tasks.len(), 2);
        assert!(plan.next_steps.is_empty());
        assert!(plan.learning_resources.is_empty());
    }

    #[test]
    fn test_detailed_path_flattens_candidate_fields() {
        let path = DetailedCareerPath {
            candidate: CareerPathCandidate {
                job_title: "Data Analyst".to_string(),
                industry: "Tech".to_string(),
                confidence_score: 0.8,
            },
            summary: "Strong alignment".to_string(),
            roadmap: vec![],
            next_steps: vec![],
            learning_resources: vec![],
        };

        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value["job_title"], "Data Analyst");
        assert_eq!(value["summary"], "Strong alignment");
        assert!(value.get("candidate").is_none());
    }
}
