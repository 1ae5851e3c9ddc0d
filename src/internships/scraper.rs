// src/internships/scraper.rs
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

use super::types::InternshipListing;
use crate::utils::slugify;

const MAX_LISTINGS: usize = 10;
const FALLBACK_TERM: &str = "internship";
const LOCATION_ANY: &str = "any";

/// Scrapes the internship search site.
///
/// The network call and the markup parsing are kept separate so the parsing
/// can be exercised on raw HTML without touching the network.
pub struct InternshipScraper {
    client: Client,
    base_url: String,
}

impl InternshipScraper {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the search URL from the primary skill and an optional location.
    ///
    /// The first skill is the search term, falling back to "internship" when
    /// none were given. A location equal to "any" (any case) means no
    /// location segment.
    pub fn build_search_url(&self, skills: &[String], location: Option<&str>) -> String {
        let term = skills.first().map(String::as_str).unwrap_or(FALLBACK_TERM);
        let mut url = format!("{}/internships/keywords-{}", self.base_url, slugify(term));

        if let Some(location) = location {
            let location = location.trim();
            if !location.is_empty() && !location.eq_ignore_ascii_case(LOCATION_ANY) {
                url.push_str("/location-");
                url.push_str(&slugify(location));
            }
        }

        url
    }

    /// Fetch matching internships. Any failure degrades to an empty list.
    pub async fn fetch(&self, skills: &[String], location: Option<&str>) -> Vec<InternshipListing> {
        match self.fetch_listings(skills, location).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Internship fetch failed: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_listings(
        &self,
        skills: &[String],
        location: Option<&str>,
    ) -> Result<Vec<InternshipListing>> {
        let url = self.build_search_url(skills, location);
        info!("Fetching internship search page: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch internship search page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        let listings = self.parse_listings(&html);
        info!("Extracted {} internship listings", listings.len());
        Ok(listings)
    }

    /// Extract listings from raw search-page markup.
    ///
    /// Only the first 10 listing blocks are considered; a block that does
    /// not match the expected shape is skipped without affecting siblings.
    pub fn parse_listings(&self, html: &str) -> Vec<InternshipListing> {
        let document = Html::parse_document(html);

        let Ok(block_selector) = Selector::parse("div.internship_meta") else {
            return Vec::new();
        };

        document
            .select(&block_selector)
            .take(MAX_LISTINGS)
            .filter_map(|block| self.parse_block(block))
            .collect()
    }

    fn parse_block(&self, block: ElementRef) -> Option<InternshipListing> {
        let Some(title) = Self::first_text_by_selectors(&block, &["h3", "h2", "h1"]) else {
            warn!("Skipping internship block without a title");
            return None;
        };

        let company = Self::first_text_by_selectors(&block, &["a.link_display_like_text"])
            .unwrap_or_else(|| "N/A".to_string());

        let Some(href) = Self::first_href(&block) else {
            warn!("Skipping internship block without a link: {}", title);
            return None;
        };

        Some(InternshipListing {
            title,
            company,
            link: self.resolve_link(&href),
        })
    }

    fn first_text_by_selectors(block: &ElementRef, selectors: &[&str]) -> Option<String> {
        for selector_str in selectors {
            if let Ok(selector) = Selector::parse(selector_str) {
                if let Some(element) = block.select(&selector).next() {
                    let text = Self::clean_text(&element.text().collect::<Vec<_>>().join(" "));
                    if !text.is_empty() {
                        return Some(text);
                    }
                }
            }
        }
        None
    }

    fn first_href(block: &ElementRef) -> Option<String> {
        let selector = Selector::parse("a").ok()?;
        block
            .select(&selector)
            .find_map(|anchor| anchor.value().attr("href"))
            .map(str::to_string)
    }

    fn resolve_link(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}/{}", self.base_url, href.trim_start_matches('/'))
        }
    }

    fn clean_text(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
