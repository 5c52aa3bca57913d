//! Prompt text utilities

use std::collections::HashSet;

/// Substitute used when a prompt is empty after cleanup
pub const EMPTY_PROMPT_FALLBACK: &str = "a simple image";

/// Modifiers used by `prompt_variations` when none are supplied
pub const DEFAULT_VARIATIONS: [&str; 5] = [
    "high quality, detailed",
    "photorealistic, 8k resolution",
    "artistic, beautiful",
    "professional photography",
    "masterpiece, best quality",
];

const STOP_WORDS: [&str; 21] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being",
];

/// Trim and collapse whitespace runs to single spaces
pub fn preprocess_text(text: &str) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        EMPTY_PROMPT_FALLBACK.to_string()
    } else {
        cleaned
    }
}

/// Base prompt followed by one `"{base}, {modifier}"` entry per modifier
pub fn prompt_variations(base_prompt: &str, variations: Option<&[&str]>) -> Vec<String> {
    let variations = variations.unwrap_or(&DEFAULT_VARIATIONS);

    let mut result = Vec::with_capacity(variations.len() + 1);
    result.push(base_prompt.to_string());
    result.extend(
        variations
            .iter()
            .map(|variation| format!("{}, {}", base_prompt, variation)),
    );
    result
}

/// Lowercased content words longer than two characters, first occurrence order
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word) && word.chars().count() > 2)
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}
