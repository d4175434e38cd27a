//! 개드립 (DogDrip) humor board scraper.
//!
//! Listing anchors carry a `title-link` class. Administrative posts
//! (notices, board rules) share the same markup and are filtered out by
//! title keyword.

use crate::models::{HumorItem, Site};
use crate::net;
use crate::scrapers::stripped_text;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

const LIST_URL: &str = "https://www.dogdrip.net/dogdrip";

/// Titles containing any of these are board administration, not humor.
const EXCLUDED_KEYWORDS: [&str; 2] = ["공지", "규칙"];

static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.title-link").unwrap());
static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://www.dogdrip.net").unwrap());

/// Scrape the 개드립 humor listing. Returns an empty batch on fetch failure.
pub async fn scrape(client: &Client) -> Vec<HumorItem> {
    let html = match net::fetch_html(client, LIST_URL).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = LIST_URL, error = %e, "Dogdrip listing fetch failed");
            return Vec::new();
        }
    };

    let items = extract(&html);
    info!(count = items.len(), url = LIST_URL, "Scraped Dogdrip posts");
    items
}

/// Extract post candidates from a listing page.
pub fn extract(html: &str) -> Vec<HumorItem> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for link in document.select(&TITLE_LINK) {
        let title = stripped_text(&link);
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if EXCLUDED_KEYWORDS.iter().any(|kw| title.contains(kw)) {
            continue;
        }
        let Ok(resolved) = BASE.join(href) else {
            continue;
        };

        items.push(HumorItem::new(Site::Dogdrip, title, resolved.to_string()));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <a class="title-link" href="/dogdrip/123">강아지가 말을 함</a>
          <a class="title-link" href="/dogdrip/124">[공지] 게시판 이용 안내</a>
          <a class="title-link" href="/dogdrip/125">게시판 규칙 안내</a>
          <a class="title-link" href="https://www.dogdrip.net/dogdrip/126">절대 안 웃긴 글</a>
          <a class="title-link">링크 없는 제목</a>
          <a href="/dogdrip/127">클래스 없는 링크</a>
        </body></html>
    "#;

    #[test]
    fn test_extract_filters_notices_and_resolves_links() {
        let items = extract(LISTING);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "강아지가 말을 함");
        assert_eq!(items[0].sourceUrl, "https://www.dogdrip.net/dogdrip/123");
        assert_eq!(items[0].sourceSite, Site::Dogdrip);
        assert_eq!(items[1].sourceUrl, "https://www.dogdrip.net/dogdrip/126");
    }

    #[test]
    fn test_extract_empty_page() {
        assert!(extract("<html><body></body></html>").is_empty());
        assert!(extract("").is_empty());
    }
}
