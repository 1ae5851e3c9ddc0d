// src/web/mod.rs

pub mod handlers;
pub mod render;
pub mod types;

pub use types::*;

use crate::config::ConfigManager;
use crate::internships::InternshipScraper;
use anyhow::Result;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::{catch, catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

#[get("/")]
pub async fn index() -> RawHtml<String> {
    handlers::index_handler().await
}

#[post("/", data = "<form>")]
pub async fn search(
    form: Form<SearchForm>,
    config: &State<ServerConfig>,
    scraper: &State<InternshipScraper>,
) -> RawHtml<String> {
    handlers::search_handler(form.into_inner(), config, scraper).await
}

#[get("/health")]
pub async fn health() -> &'static str {
    "ok"
}

// Error catchers

#[catch(404)]
pub fn not_found() -> RawHtml<String> {
    RawHtml(render::render_error_page(
        "Page not found",
        "There is nothing at this address.",
    ))
}

#[catch(500)]
pub fn internal_error() -> RawHtml<String> {
    RawHtml(render::render_error_page(
        "Something went wrong",
        "Try again in a few moments.",
    ))
}

/// Assemble the Rocket instance; split from launch so tests can mount it
/// against a local client.
pub fn build_rocket(config: &ConfigManager) -> Rocket<Build> {
    let server_config = ServerConfig {
        dataset_path: config.environment.dataset_path.clone(),
    };
    let scraper = InternshipScraper::new(
        &config.service.internship_base_url,
        config.service.timeout_seconds,
    );

    let figment = rocket::Config::figment()
        .merge(("port", config.environment.port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(server_config)
        .manage(scraper)
        .register("/", catchers![not_found, internal_error])
        .mount("/", routes![index, search, health])
}

/// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting Career Opportunity Finder server");
    info!("Server: http://0.0.0.0:{}", config.environment.port);

    let _rocket = build_rocket(&config).launch().await?;

    Ok(())
}
