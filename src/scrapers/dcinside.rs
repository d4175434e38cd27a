//! 디시인사이드 실시간 베스트 (DC Inside dcbest gallery) scraper.
//!
//! The gallery is a plain table: content rows carry the `ub-content`
//! class, with title, view count, and recommend count in dedicated cells.
//! The count cells are free text, so anything non-numeric collapses to 0.

use crate::models::{HumorItem, Site};
use crate::net;
use crate::scrapers::stripped_text;
use crate::utils::parse_count;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

const LIST_URL: &str = "https://gall.dcinside.com/board/lists/?id=dcbest";

static CONTENT_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr.ub-content").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("td.gall_tit a").unwrap());
static VIEW_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td.gall_count").unwrap());
static RECOMMEND_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.gall_recommend").unwrap());
static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://gall.dcinside.com").unwrap());

/// Scrape the dcbest gallery listing. Returns an empty batch on fetch failure.
pub async fn scrape(client: &Client) -> Vec<HumorItem> {
    let html = match net::fetch_html(client, LIST_URL).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = LIST_URL, error = %e, "DC Inside listing fetch failed");
            return Vec::new();
        }
    };

    let items = extract(&html);
    info!(count = items.len(), url = LIST_URL, "Scraped DC Inside posts");
    items
}

/// Extract post candidates from a gallery listing page.
pub fn extract(html: &str) -> Vec<HumorItem> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for row in document.select(&CONTENT_ROW) {
        let Some(anchor) = row.select(&TITLE_LINK).next() else {
            continue;
        };
        let title = stripped_text(&anchor);
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let views = row
            .select(&VIEW_CELL)
            .next()
            .map(|td| parse_count(&stripped_text(&td)))
            .unwrap_or(0);
        let likes = row
            .select(&RECOMMEND_CELL)
            .next()
            .map(|td| parse_count(&stripped_text(&td)))
            .unwrap_or(0);

        let Ok(resolved) = BASE.join(href) else {
            continue;
        };

        let mut item = HumorItem::new(Site::DcInside, title, resolved.to_string());
        item.viewCount = views;
        item.likeCount = likes;
        items.push(item);
    }

    items
}
