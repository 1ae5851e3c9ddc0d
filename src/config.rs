// src/config.rs
//! Unified configuration management - env overrides with local defaults

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::listings::ListingsStore;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub dataset_path: PathBuf,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub internship_base_url: String,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = Self::load_environment()?;
        let service = Self::load_service();

        Ok(Self {
            environment,
            service,
        })
    }

    /// Load environment configuration
    fn load_environment() -> Result<EnvironmentConfig> {
        let dataset_path = match std::env::var("DATASET_PATH") {
            Ok(path) => Self::resolve_path(PathBuf::from(path))?,
            Err(_) => std::env::current_dir()
                .context("Failed to get current directory")?
                .join("job_listings.csv"),
        };

        let port = match std::env::var("ROCKET_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("ROCKET_PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        info!("Dataset: {}", dataset_path.display());
        Ok(EnvironmentConfig { dataset_path, port })
    }

    /// Load external service configuration
    fn load_service() -> ServiceConfig {
        let internship_base_url = std::env::var("INTERNSHIP_SITE_URL")
            .unwrap_or_else(|_| "https://internshala.com".to_string());

        ServiceConfig {
            internship_base_url,
            timeout_seconds: 10,
        }
    }

    fn resolve_path(path: PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path)
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    /// Check the dataset once at startup so schema problems fail fast
    pub async fn validate_dataset(&self) -> Result<usize> {
        let rows = ListingsStore::load(&self.environment.dataset_path)
            .await
            .with_context(|| {
                format!(
                    "Dataset validation failed: {}",
                    self.environment.dataset_path.display()
                )
            })?;
        Ok(rows.len())
    }
}
