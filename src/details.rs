//! Detail-page enrichment for selected posts.
//!
//! For each selected post the enricher fetches the article page and pulls
//! a thumbnail and a short summary, preferring OpenGraph metadata and
//! falling back to the first usable `<img>` / `<p>` in the body. Every
//! failure path yields placeholder values: enrichment can degrade a
//! post, never drop it.

use crate::net;
use crate::scrapers::stripped_text;
use crate::utils::ellipsize;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Pause before every detail fetch. Courtesy pacing toward the boards,
/// not a correctness mechanism. Enrichment runs strictly sequentially.
pub const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Summary used when the detail page could not be fetched or yielded no
/// usable text.
pub const SUMMARY_PLACEHOLDER: &str = "내용을 불러오지 못했습니다.";

/// Every enriched post currently lands in the one category the dashboard
/// renders.
pub const DEFAULT_CATEGORY: &str = "유머";

const SUMMARY_MAX_CHARS: usize = 100;
const PARAGRAPH_MIN_CHARS: usize = 20;

static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:description"]"#).unwrap());
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Metadata pulled from one article page.
#[derive(Debug, Clone)]
pub struct ArticleDetails {
    pub summary: String,
    pub thumbnail_url: String,
    pub category: String,
}

impl Default for ArticleDetails {
    fn default() -> Self {
        ArticleDetails {
            summary: SUMMARY_PLACEHOLDER.to_string(),
            thumbnail_url: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Fetch an article page and extract its details, after the fixed pause.
/// Never errors: fetch or parse failure returns the defaults.
pub async fn enrich(client: &Client, url: &str) -> ArticleDetails {
    sleep(FETCH_DELAY).await;

    let html = match net::fetch_html(client, url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(%url, error = %e, "Detail page fetch failed; using placeholders");
            return ArticleDetails::default();
        }
    };

    let details = extract(&html);
    debug!(%url, has_thumbnail = !details.thumbnail_url.is_empty(), "Enriched post");
    details
}

/// Extract details from an article page.
pub fn extract(html: &str) -> ArticleDetails {
    let document = Html::parse_document(html);
    let mut details = ArticleDetails::default();

    let og_image = document
        .select(&OG_IMAGE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty());
    if let Some(content) = og_image {
        details.thumbnail_url = content.to_string();
    } else if let Some(src) = document
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
    {
        // Inline images are only usable when already absolute.
        if src.starts_with("http") {
            details.thumbnail_url = src.to_string();
        }
    }

    let og_description = document
        .select(&OG_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty());
    if let Some(content) = og_description {
        details.summary = ellipsize(content, SUMMARY_MAX_CHARS);
    } else if let Some(text) = document
        .select(&PARAGRAPH)
        .map(|p| stripped_text(&p))
        .find(|text| text.chars().count() > PARAGRAPH_MIN_CHARS)
    {
        details.summary = ellipsize(&text, SUMMARY_MAX_CHARS);
    }

    details
}
