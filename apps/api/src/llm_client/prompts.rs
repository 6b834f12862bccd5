// Cross-cutting prompt fragments shared by the domain prompt modules.
// Injected into templates via `.replace("{persona}", ...)` at call sites.

/// Shared persona fragment for the user-facing generative surfaces.
pub const CAREER_ADVISOR_PERSONA: &str = "You are an experienced career advisor \
    helping people discover realistic career paths based on their skills, \
    academic background, and interests. Be specific and encouraging, and never \
    invent credentials the person does not have.";
