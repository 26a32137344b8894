//! Naive keyword extraction from a business description

/// Common English words that never become keywords
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was",
];

/// Tokenize a description into keywords.
///
/// Lowercases, drops everything that is not an ASCII letter or whitespace,
/// then keeps tokens longer than two characters that are not stop words.
/// Order follows the description; duplicates are kept.
pub fn extract_keywords(description: &str) -> Vec<String> {
    let cleaned: String = description
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Keywords with duplicates removed, first occurrence kept
pub fn unique_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .iter()
        .filter(|k| seen.insert(k.as_str()))
        .cloned()
        .collect()
}
