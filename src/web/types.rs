// src/web/types.rs
use rocket::form::FromForm;
use std::path::PathBuf;

use crate::types::UserQuery;
use crate::utils::parse_skill_list;

/// Shared server state managed by Rocket
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub dataset_path: PathBuf,
}

/// Raw submitted fields. Everything is optional server-side so a sparse or
/// hand-crafted POST degrades to empty values instead of failing the route.
#[derive(Debug, FromForm)]
pub struct SearchForm {
    pub education: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub sectors: Vec<String>,
}

impl SearchForm {
    pub fn into_query(self) -> UserQuery {
        UserQuery {
            education_level: self.education.unwrap_or_default().trim().to_string(),
            location: self.location.unwrap_or_default().trim().to_string(),
            skills: parse_skill_list(&self.skills.unwrap_or_default()),
            sector_interests: self.sectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_query_parses_skills() {
        let form = SearchForm {
            education: Some("Bachelor's Degree".to_string()),
            location: Some(" Bangalore ".to_string()),
            skills: Some("Python, , flask ,".to_string()),
            sectors: vec!["Technology".to_string()],
        };
        let query = form.into_query();
        assert_eq!(query.education_level, "Bachelor's Degree");
        assert_eq!(query.location, "Bangalore");
        assert_eq!(query.skills, vec!["Python", "flask"]);
        assert_eq!(query.sector_interests, vec!["Technology"]);
    }

    #[test]
    fn test_into_query_tolerates_missing_fields() {
        let form = SearchForm {
            education: None,
            location: None,
            skills: None,
            sectors: Vec::new(),
        };
        let query = form.into_query();
        assert!(query.education_level.is_empty());
        assert!(query.location.is_empty());
        assert!(query.skills.is_empty());
        assert!(query.sector_interests.is_empty());
    }
}
