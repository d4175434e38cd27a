//! 웃긴대학 (Humor University) mobile board scraper.
//!
//! The mobile board is served in EUC-KR and its markup is too loose for
//! class selectors, so extraction scans every anchor whose href points at
//! `read.html` and keeps those with a plausible title (5+ characters,
//! filtering out paging and icon links). The page repeats post links in
//! several blocks, so the haul stops once the cap is exceeded.

use crate::models::{HumorItem, Site};
use crate::net;
use crate::scrapers::stripped_text;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

const LIST_URL: &str = "http://m.humoruniv.com/board/list.html?table=pds";

/// Anchors beyond this many collected items are duplicates of earlier
/// blocks on the same page.
const ITEM_CAP: usize = 20;

const MIN_TITLE_CHARS: usize = 5;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://m.humoruniv.com/board/list.html").unwrap());

/// Scrape the 웃긴대학 mobile board. Returns an empty batch on fetch failure.
pub async fn scrape(client: &Client) -> Vec<HumorItem> {
    let html = match net::fetch_html_euc_kr(client, LIST_URL).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = LIST_URL, error = %e, "Humor University listing fetch failed");
            return Vec::new();
        }
    };

    let items = extract(&html);
    info!(
        count = items.len(),
        url = LIST_URL,
        "Scraped Humor University posts"
    );
    items
}

/// Extract post candidates from a (already decoded) listing page.
pub fn extract(html: &str) -> Vec<HumorItem> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for anchor in document.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains("read.html") {
            continue;
        }

        let title = stripped_text(&anchor);
        if title.chars().count() < MIN_TITLE_CHARS {
            continue;
        }

        let Ok(resolved) = BASE.join(href) else {
            continue;
        };

        items.push(HumorItem::new(Site::HumorUniv, title, resolved.to_string()));
        if items.len() > ITEM_CAP {
            break;
        }
    }

    items
}
