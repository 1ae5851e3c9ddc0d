// src/listings/mod.rs

pub mod matcher;
pub mod store;
pub mod types;

pub use matcher::suggest_jobs;
pub use store::ListingsStore;
pub use types::JobListingRow;
