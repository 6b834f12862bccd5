// All LLM prompt constants for the recommendation pipeline.

/// System prompt for candidate generation — enforces JSON-only output.
pub const RECOMMENDATION_SYSTEM: &str = "You are an expert career counselor \
    matching people to realistic career paths. \
    You MUST respond with valid JSON only — a JSON array of career path objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Candidate generation prompt template.
/// Replace: {skills}, {academic_background}, {interests}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Recommend career paths for the person described below.

Return a JSON ARRAY with this EXACT element schema (no extra fields):
[
  {
    "job_title": "Data Analyst",
    "industry": "Tech",
    "confidence_score": 0.8
  }
]

Rules:
1. Recommend between 3 and 6 career paths, ordered from most to least relevant.
2. `confidence_score` is a number between 0 and 1 reflecting how well the person's
   skills, academic background, and interests align with the role today.
3. `industry` is a short label such as "Tech", "Healthcare", "Finance", "Education".
4. Prefer roles reachable from the current skills within 1-2 years of focused effort.
5. If nothing fits at all, return an empty array [].

PERSON:
Skills: {skills}
Academic background: {academic_background}
Interests: {interests}"#;

/// System prompt for the per-path skill alignment summary.
pub const SUMMARY_SYSTEM: &str = "You are an expert career counselor writing a \
    short skill-alignment summary for one specific career path. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Summary prompt template.
/// Replace: {skills}, {career_path}, {background_details}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a tailored summary of how this person's skills and experience align with the career path "{career_path}".

Return a JSON object with this EXACT schema:
{
  "summary": "3-5 sentences, written to the person, highlighting which of their skills transfer directly, what their background contributes, and the single most important gap to close."
}

Skills: {skills}
Background: {background_details}"#;

/// System prompt for roadmap generation.
pub const ROADMAP_SYSTEM: &str = "You are an expert career counselor designing \
    a staged learning roadmap toward one specific job title. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Roadmap prompt template.
/// Replace: {skills}, {academic_background}, {interests}, {job_title}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Design a learning roadmap that takes the person described below from their current skills to being hireable as "{job_title}".

Return a JSON object with this EXACT schema:
{
  "roadmap": [
    {
      "title": "Foundations",
      "duration": "0-6 months",
      "description": "What this stage accomplishes and why it comes first.",
      "tasks": ["2 to 4 concrete tasks", "each independently completable"]
    }
  ],
  "next_steps": ["2-4 immediate actions to take this week"],
  "learning_resources": ["3-6 named courses, books, or communities"]
}

Rules:
1. 3 to 5 stages, strictly chronological, durations as free-form ranges ("0-6 months").
2. Each stage has 2-4 tasks. Build on the skills the person already has; do not
   restart from zero in areas they already know.
3. `next_steps` must be doable before the first stage begins.

PERSON:
Skills: {skills}
Academic background: {academic_background}
Interests: {interests}"#;
