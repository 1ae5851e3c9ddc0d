// src/types.rs
use serde::{Deserialize, Serialize};

/// One form submission, built once per POST and discarded after rendering.
///
/// Education level and sector interests ride along for the matcher even
/// though filtering currently consults skills only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    pub education_level: String,
    pub location: String,
    pub skills: Vec<String>,
    pub sector_interests: Vec<String>,
}

impl UserQuery {
    pub fn new(
        education_level: String,
        location: String,
        skills: Vec<String>,
        sector_interests: Vec<String>,
    ) -> Self {
        Self {
            education_level,
            location,
            skills,
            sector_interests,
        }
    }
}
