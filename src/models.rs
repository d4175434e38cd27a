//! Data models for humor posts and the exported trend snapshot.
//!
//! This module defines the core data structures used throughout the scraper:
//! - [`Site`]: the closed set of community boards we scrape
//! - [`HumorItem`]: one scraped post, later enriched with detail metadata
//! - [`SiteCount`]: per-site tally in the snapshot's `topSites` block
//! - [`TrendSnapshot`]: the full shape of `humor_trends.json`
//!
//! The models use camelCase field names to match the JSON schema consumed
//! by the dashboard, hence the `#[allow(non_snake_case)]` attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed summary line written into every snapshot.
pub const SNAPSHOT_SUMMARY: &str = "오늘의 인기 유머 트렌드 집계 결과입니다.";

/// The community boards this tool scrapes.
///
/// The set is closed and small, so site-specific parsing lives in one
/// module per variant rather than behind runtime plugin dispatch.
/// Serialization uses the Korean display names; those strings are part
/// of the snapshot contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Site {
    /// 개드립 (dogdrip.net)
    #[serde(rename = "개드립")]
    Dogdrip,
    /// 인스티즈 (instiz.net)
    #[serde(rename = "인스티즈")]
    Instiz,
    /// 디시인사이드 실시간 베스트 (gall.dcinside.com)
    #[serde(rename = "디시인사이드")]
    DcInside,
    /// 웃긴대학 (humoruniv.com, mobile board)
    #[serde(rename = "웃긴대학")]
    HumorUniv,
    /// 더쿠 (theqoo.net)
    #[serde(rename = "더쿠")]
    Theqoo,
}

impl Site {
    /// The order sites are scraped and consumed during round-robin
    /// selection.
    pub const SCRAPE_ORDER: [Site; 5] = [
        Site::Dogdrip,
        Site::Instiz,
        Site::DcInside,
        Site::HumorUniv,
        Site::Theqoo,
    ];

    /// The order sites appear in the snapshot's `topSites` block.
    /// Differs from [`Self::SCRAPE_ORDER`]; downstream consumers key off
    /// this ordering.
    pub const REPORT_ORDER: [Site; 5] = [
        Site::Dogdrip,
        Site::Instiz,
        Site::Theqoo,
        Site::DcInside,
        Site::HumorUniv,
    ];

    /// Korean display name, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Site::Dogdrip => "개드립",
            Site::Instiz => "인스티즈",
            Site::DcInside => "디시인사이드",
            Site::HumorUniv => "웃긴대학",
            Site::Theqoo => "더쿠",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One humor post scraped from a community board.
///
/// Listing-page extraction fills `title`, `sourceUrl`, `sourceSite`, and
/// whichever counts the listing exposes; everything else stays at its
/// default until the detail-enrichment pass fills `summary`,
/// `thumbnailUrl`, `category`, and `publishedAt` for the selected items.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HumorItem {
    /// Post title as shown on the listing page.
    pub title: String,
    /// Absolute URL of the post.
    pub sourceUrl: String,
    /// The board the post was scraped from.
    pub sourceSite: Site,
    /// View count from the listing page, 0 when the board doesn't expose one.
    pub viewCount: u32,
    /// Like/recommend count from the listing page, 0 when unavailable.
    pub likeCount: u32,
    /// Comment count from the listing page, 0 when unavailable.
    pub commentCount: u32,
    /// Short excerpt from the detail page (enrichment).
    #[serde(default)]
    pub summary: String,
    /// Preview image URL from the detail page (enrichment).
    #[serde(default)]
    pub thumbnailUrl: String,
    /// Content category (enrichment; currently always "유머").
    #[serde(default)]
    pub category: String,
    /// Timestamp stamped at enrichment time, ISO-8601 with a `Z` suffix.
    #[serde(default)]
    pub publishedAt: String,
}

impl HumorItem {
    /// Build a bare listing-page item with all counts zeroed and all
    /// enrichment fields empty.
    pub fn new(site: Site, title: impl Into<String>, source_url: impl Into<String>) -> Self {
        HumorItem {
            title: title.into(),
            sourceUrl: source_url.into(),
            sourceSite: site,
            viewCount: 0,
            likeCount: 0,
            commentCount: 0,
            summary: String::new(),
            thumbnailUrl: String::new(),
            category: String::new(),
            publishedAt: String::new(),
        }
    }
}

/// Per-site tally of how many posts made the final selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteCount {
    /// The board being counted.
    pub site: Site,
    /// Number of selected posts from that board (0 allowed).
    pub count: usize,
}

/// The full `humor_trends.json` document.
///
/// `contents` holds at most 10 items in round-robin order; `topSites`
/// always lists all five boards in [`Site::REPORT_ORDER`].
#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize)]
pub struct TrendSnapshot {
    /// Generation timestamp, ISO-8601 with a `Z` suffix.
    pub generatedAt: String,
    /// Fixed human-readable summary line.
    pub summary: String,
    /// The selected and enriched posts.
    pub contents: Vec<HumorItem>,
    /// Per-site tallies over `contents`.
    pub topSites: Vec<SiteCount>,
}
