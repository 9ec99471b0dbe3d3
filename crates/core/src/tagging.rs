//! Heuristic tag suggestion for prompts created without tags.
//!
//! Keyword matching over the prompt text, nothing more. The Prompt service
//! only depends on the `&str -> Vec<String>` contract, so a real classifier
//! can replace this implementation without touching callers.

/// Maximum number of tags a suggestion may produce.
pub const MAX_SUGGESTED_TAGS: usize = 5;

/// Keyword -> tag pairs checked against the lowercased prompt text.
const KEYWORD_TAGS: &[(&str, &str)] = &[
    ("react", "react"),
    ("node", "nodejs"),
    ("python", "python"),
    ("image", "images"),
    ("sql", "sql"),
];

/// Derive up to [`MAX_SUGGESTED_TAGS`] lowercase tags from prompt text.
///
/// Matching is case-insensitive substring search; each tag appears at most
/// once. Text that matches no keyword yields an empty list -- callers must
/// not treat that as an error.
pub fn suggest_tags(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut tags = Vec::new();

    for (keyword, tag) in KEYWORD_TAGS {
        if haystack.contains(keyword) && !tags.iter().any(|t| t == tag) {
            tags.push((*tag).to_string());
        }
        if tags.len() == MAX_SUGGESTED_TAGS {
            break;
        }
    }

    tags
}
