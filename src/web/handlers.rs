// src/web/handlers.rs
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::{error, info};

use crate::internships::InternshipScraper;
use crate::listings::{suggest_jobs, ListingsStore};
use crate::web::render::render_page;
use crate::web::types::{SearchForm, ServerConfig};

/// GET: no submission yet, render the bare form
pub async fn index_handler() -> RawHtml<String> {
    RawHtml(render_page(None, &[], &[]))
}

/// POST: parse the submission, gather both result sets, render
pub async fn search_handler(
    form: SearchForm,
    config: &State<ServerConfig>,
    scraper: &State<InternshipScraper>,
) -> RawHtml<String> {
    let query = form.into_query();
    info!(
        "Search request: {} skill(s), location '{}'",
        query.skills.len(),
        query.location
    );

    // No skill terms means no meaningful search query; skip the outbound call.
    let internships = if query.skills.is_empty() {
        Vec::new()
    } else {
        scraper.fetch(&query.skills, Some(&query.location)).await
    };

    let rows = match ListingsStore::load(&config.dataset_path).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to reload job listings: {:#}", e);
            Vec::new()
        }
    };
    let suggestions = suggest_jobs(&query, &rows);

    RawHtml(render_page(Some(&query), &internships, &suggestions))
}
