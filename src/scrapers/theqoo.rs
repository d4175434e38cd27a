//! 더쿠 (TheQoo) hot board scraper.
//!
//! Standard board table: one row per post, title anchor inside the
//! `td.title` cell. The hot board exposes no usable counts.

use crate::models::{HumorItem, Site};
use crate::net;
use crate::scrapers::stripped_text;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

const LIST_URL: &str = "https://theqoo.net/hot";

static BOARD_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("table tbody tr").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("td.title a").unwrap());
static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://theqoo.net").unwrap());

/// Scrape the 더쿠 hot board. Returns an empty batch on fetch failure.
pub async fn scrape(client: &Client) -> Vec<HumorItem> {
    let html = match net::fetch_html(client, LIST_URL).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = LIST_URL, error = %e, "TheQoo hot board fetch failed");
            return Vec::new();
        }
    };

    let items = extract(&html);
    info!(count = items.len(), url = LIST_URL, "Scraped TheQoo posts");
    items
}

/// Extract post candidates from a hot-board listing page.
pub fn extract(html: &str) -> Vec<HumorItem> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for row in document.select(&BOARD_ROW) {
        let Some(anchor) = row.select(&TITLE_LINK).next() else {
            continue;
        };
        let title = stripped_text(&anchor);
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = BASE.join(href) else {
            continue;
        };

        items.push(HumorItem::new(Site::Theqoo, title, resolved.to_string()));
    }

    items
}
