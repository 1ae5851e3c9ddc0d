// src/listings/matcher.rs
use crate::types::UserQuery;
use crate::utils::normalize_skill;

use super::types::JobListingRow;

const MAX_SUGGESTIONS: usize = 10;

/// Filter the dataset down to rows sharing at least one skill with the query.
///
/// A single overlapping token is enough; rows keep their dataset order and
/// the result is capped at 10. The query's education level and sector
/// interests are accepted but do not affect filtering yet.
pub fn suggest_jobs(query: &UserQuery, rows: &[JobListingRow]) -> Vec<JobListingRow> {
    let user_skills: Vec<String> = query.skills.iter().map(|s| normalize_skill(s)).collect();

    rows.iter()
        .filter(|row| {
            let required = row.skill_tokens();
            user_skills.iter().any(|skill| required.contains(skill))
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
