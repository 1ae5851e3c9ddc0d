// src/internships/types.rs
use serde::{Deserialize, Serialize};

/// One internship posting extracted from the search page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternshipListing {
    pub title: String,
    pub company: String,
    pub link: String,
}
