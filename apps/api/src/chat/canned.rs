//! Static canned Q/A table for the chat assistant.
//!
//! Matching is exact and case-sensitive by design — this is a lookup table,
//! not a fuzzy-intent engine. Anything that misses falls through to the
//! generative backend.

use std::time::Duration;

/// Fixed pacing delay before a canned answer is returned, so instant lookups
/// do not render jarringly fast next to generated replies.
pub const CANNED_REPLY_DELAY: Duration = Duration::from_millis(400);

const CANNED_ANSWERS: &[(&str, &str)] = &[
    (
        "What is Compass?",
        "Compass is a career guidance assistant. Tell it your skills, academic \
         background, and interests, or upload your resume, and it suggests \
         career paths with a tailored summary and a step-by-step learning roadmap \
         for each one.",
    ),
    (
        "How does Compass work?",
        "Compass sends your profile to a generative AI model to rank matching \
         career paths, then builds a skill summary and a staged roadmap for every \
         suggestion. You can open any path to see the details.",
    ),
    (
        "Is Compass free?",
        "Yes. Compass is free to use while it is in beta.",
    ),
    (
        "How do I get career recommendations?",
        "Fill in your skills, academic background, and interests on the main form \
         and submit it. You can also upload a resume instead of typing your skills \
         and background by hand.",
    ),
    (
        "Can I upload my resume?",
        "Yes. Upload a resume and Compass extracts your skills and academic \
         background automatically. Extracted values replace whatever was typed in \
         those two fields.",
    ),
    (
        "What file formats do you support for resumes?",
        "PDF and plain text resumes are supported.",
    ),
    (
        "How accurate are the recommendations?",
        "Recommendations are AI-generated starting points, not guarantees. Treat \
         the confidence score as a rough signal and use the roadmap to judge \
         whether a path genuinely fits you.",
    ),
    (
        "What is a confidence score?",
        "Each suggested path carries a score between 0 and 1 estimating how well \
         your current skills, background, and interests align with that role \
         today. Higher means a closer match.",
    ),
    (
        "What is a career roadmap?",
        "A roadmap breaks the journey toward a role into chronological stages. \
         Each stage has a title, an expected duration, a description, and a short \
         list of concrete tasks.",
    ),
    (
        "How long does a roadmap take to complete?",
        "It varies by path and starting point. Most roadmaps span several stages \
         from a few months to about two years; each stage shows its own expected \
         duration.",
    ),
    (
        "Can I print my results?",
        "Yes. Open a career path and use your browser's print function; the \
         detail view is print-friendly.",
    ),
    (
        "Is my data saved?",
        "No. Your profile and results live only for your current session. \
         Resetting the form discards them.",
    ),
    (
        "Do you store my resume?",
        "No. Resume text is used once to extract your skills and background and \
         is not stored afterwards.",
    ),
    (
        "How do I reset my results?",
        "Use the reset button on the results page. This clears your session, \
         including cached career path details.",
    ),
    (
        "How do I contact support?",
        "Use the feedback link in the footer and we will get back to you by \
         email.",
    ),
];

/// Exact-match lookup into the canned table.
pub fn canned_answer(message: &str) -> Option<&'static str> {
    CANNED_ANSWERS
        .iter()
        .find(|(question, _)| *question == message)
        .map(|(_, answer)| *answer)
}
