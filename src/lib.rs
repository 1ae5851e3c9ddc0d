// src/lib.rs

pub mod config;
pub mod internships;
pub mod listings;
pub mod types;
pub mod utils;
pub mod web;

pub use config::ConfigManager;
pub use web::start_web_server;
