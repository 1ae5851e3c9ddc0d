// src/listings/store.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use super::types::JobListingRow;

const REQUIRED_COLUMNS: [&str; 2] = ["Job_Title", "Required_Skills"];

/// Read-only access to the job listings dataset.
///
/// The file is re-read on every call; nothing is cached across requests.
pub struct ListingsStore;

impl ListingsStore {
    /// Load the dataset fresh from disk
    pub async fn load(path: &Path) -> Result<Vec<JobListingRow>> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
        Self::from_csv(&content)
    }

    /// Parse dataset content, dropping rows that cannot participate in matching
    pub fn from_csv(content: &str) -> Result<Vec<JobListingRow>> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());

        let headers = reader.headers().context("Failed to read dataset headers")?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                anyhow::bail!("Dataset is missing required column: {}", column);
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: JobListingRow = record.context("Failed to parse dataset row")?;
            if row.required_skills.trim().is_empty() {
                warn!("Skipping dataset row with no required skills: {}", row.title);
                continue;
            }
            rows.push(row);
        }

        info!("Loaded {} job listings", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = "\
Job_Title,Required_Skills,Company,Location
Data Analyst,\"Python, SQL, Excel\",Acme Corp,Mumbai
Backend Engineer,\"Rust, SQL\",,
Copywriter,,WordHouse,Remote
";

    #[test]
    fn test_parses_rows_in_file_order() {
        let rows = ListingsStore::from_csv(DATASET).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Data Analyst");
        assert_eq!(rows[1].title, "Backend Engineer");
    }

    #[test]
    fn test_skips_row_without_skills() {
        let rows = ListingsStore::from_csv(DATASET).unwrap();
        assert!(rows.iter().all(|row| row.title != "Copywriter"));
    }

    #[test]
    fn test_optional_columns() {
        let rows = ListingsStore::from_csv(DATASET).unwrap();
        assert_eq!(rows[0].company(), "Acme Corp");
        assert_eq!(rows[1].company(), "N/A");
        assert_eq!(rows[1].location(), "N/A");
    }

    #[test]
    fn test_missing_required_column_fails() {
        let result = ListingsStore::from_csv("Job_Title,Company\nAnalyst,Acme\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Required_Skills"));
    }

    #[test]
    fn test_headers_without_rows_is_empty() {
        let rows = ListingsStore::from_csv("Job_Title,Required_Skills\n").unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = ListingsStore::load(Path::new("/nonexistent/job_listings.csv")).await;
        assert!(result.is_err());
    }
}
