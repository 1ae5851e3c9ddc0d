// src/utils.rs

/// Normalize a free-text search term into a URL path segment
pub fn slugify(term: &str) -> String {
    term.trim().replace(' ', "-").to_lowercase()
}

/// Split a comma-separated skills field into clean tokens
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Lower-case and trim a skill token for comparison
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}
