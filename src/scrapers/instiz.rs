//! 인스티즈 (Instiz) front-page scraper.
//!
//! Titles live in `span.post_title` nested somewhere inside the post
//! anchor, so extraction walks up from the span to the enclosing `<a>`.
//! A sibling `span.cmt` inside the same anchor carries the comment count.
//! The front page mixes absolute, protocol-relative, root-relative, and
//! bare-relative hrefs, plus `javascript:` pseudo-links on widgets.

use crate::models::{HumorItem, Site};
use crate::net;
use crate::scrapers::stripped_text;
use crate::utils::parse_count;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{error, info};
use url::Url;

const LIST_URL: &str = "https://www.instiz.net/";

static POST_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.post_title").unwrap());
static COMMENT_COUNT: Lazy<Selector> = Lazy::new(|| Selector::parse("span.cmt").unwrap());
static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://www.instiz.net/").unwrap());

/// Scrape the 인스티즈 front page. Returns an empty batch on fetch failure.
pub async fn scrape(client: &Client) -> Vec<HumorItem> {
    let html = match net::fetch_html(client, LIST_URL).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = LIST_URL, error = %e, "Instiz front page fetch failed");
            return Vec::new();
        }
    };

    let items = extract(&html);
    info!(count = items.len(), url = LIST_URL, "Scraped Instiz posts");
    items
}

/// Extract post candidates from a front page.
pub fn extract(html: &str) -> Vec<HumorItem> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for span in document.select(&POST_TITLE) {
        let title = stripped_text(&span);

        let Some(anchor) = enclosing_anchor(&span) else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.starts_with("javascript") {
            continue;
        }

        let comment_count = anchor
            .select(&COMMENT_COUNT)
            .next()
            .map(|cmt| parse_count(&stripped_text(&cmt)))
            .unwrap_or(0);

        let Ok(resolved) = BASE.join(href) else {
            continue;
        };

        let mut item = HumorItem::new(Site::Instiz, title, resolved.to_string());
        item.commentCount = comment_count;
        items.push(item);
    }

    items
}

/// Nearest `<a>` ancestor of a title span, if any.
fn enclosing_anchor<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "a")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT_PAGE: &str = r#"
        <html><body>
          <a href="/pt/3390001"><span class="post_title">고양이 짤 모음</span><span class="cmt">12</span></a>
          <a href="//www.instiz.net/pt/3390002"><span class="post_title">프로토콜 상대 링크 글</span></a>
          <a href="pt/3390003"><div><span class="post_title">중첩 깊은 제목</span></div><span class="cmt">많음</span></a>
          <a href="javascript:void(0)"><span class="post_title">위젯 링크</span></a>
          <span class="post_title">앵커 밖의 제목</span>
        </body></html>
    "#;

    #[test]
    fn test_extract_walks_up_to_anchor_and_normalizes_links() {
        let items = extract(FRONT_PAGE);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "고양이 짤 모음");
        assert_eq!(items[0].sourceUrl, "https://www.instiz.net/pt/3390001");
        assert_eq!(items[0].commentCount, 12);

        // protocol-relative gains https
        assert_eq!(items[1].sourceUrl, "https://www.instiz.net/pt/3390002");
        assert_eq!(items[1].commentCount, 0);

        // bare-relative resolves against the site root; unparsable count -> 0
        assert_eq!(items[2].sourceUrl, "https://www.instiz.net/pt/3390003");
        assert_eq!(items[2].commentCount, 0);
    }

    #[test]
    fn test_extract_skips_javascript_and_orphan_titles() {
        let items = extract(FRONT_PAGE);
        assert!(items.iter().all(|i| !i.sourceUrl.contains("javascript")));
        assert!(items.iter().all(|i| i.title != "앵커 밖의 제목"));
        assert!(items.iter().all(|i| i.title != "위젯 링크"));
    }
}
