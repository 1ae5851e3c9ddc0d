// src/listings/types.rs
use serde::Deserialize;

use crate::utils::normalize_skill;

/// One row of the job listings dataset.
///
/// Header names follow the deployed CSV; company and location are optional
/// columns and render as "N/A" when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct JobListingRow {
    #[serde(rename = "Job_Title")]
    pub title: String,
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Required_Skills")]
    pub required_skills: String,
}

impl JobListingRow {
    pub fn company(&self) -> &str {
        self.company.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or("N/A")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().filter(|l| !l.trim().is_empty()).unwrap_or("N/A")
    }

    /// Required skills as normalized comparison tokens
    pub fn skill_tokens(&self) -> Vec<String> {
        self.required_skills
            .split(',')
            .map(normalize_skill)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(skills: &str) -> JobListingRow {
        JobListingRow {
            title: "Data Analyst".to_string(),
            company: None,
            location: Some(" ".to_string()),
            required_skills: skills.to_string(),
        }
    }

    #[test]
    fn test_skill_tokens_normalized() {
        assert_eq!(row("Python, SQL, Excel").skill_tokens(), vec!["python", "sql", "excel"]);
        assert_eq!(row("C++,  Rust ").skill_tokens(), vec!["c++", "rust"]);
    }

    #[test]
    fn test_optional_columns_default() {
        let r = row("Python");
        assert_eq!(r.company(), "N/A");
        assert_eq!(r.location(), "N/A");
    }
}
