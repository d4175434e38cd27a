//! Endpoint checks for the dashboard's crawler APIs.
//!
//! Each check GETs one JSON endpoint and classifies the response as
//! PASS, WARN, or FAIL. WARN means the endpoint answered but with
//! recognizable fallback/mock data rather than live crawl results.
//!
//! The fallback heuristics are sentinel values the dashboard itself
//! plants in degraded responses (two notice strings in the trends
//! source list, one hardcoded video id). They are brittle coupling to
//! that system and must be kept byte-for-byte identical to it.
//!
//! Classification is pure ([`classify_trends`] and friends) so the
//! heuristics are testable without any transport; the `check_*`
//! functions layer the fetch and the human-readable diagnostics on top.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use tracing::warn;

/// Source-list entries the dashboard substitutes when its trend
/// collection failed and it served placeholder data instead.
pub const FALLBACK_SOURCE_MARKERS: [&str; 2] =
    ["시스템 알림(데이터 수집 실패)", "시스템 알림(오류 발생)"];

/// Video id of the hardcoded fallback entry (NewJeans 'ETA') the
/// dashboard serves when the YouTube crawl produced nothing.
pub const FALLBACK_VIDEO_ID: &str = "je_R3gEtDbw";

/// Verdict for one endpoint check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Endpoint served live data.
    Pass(&'static str),
    /// Endpoint answered, but with fallback or mock data.
    Warn(&'static str),
    /// Endpoint unreachable, unparsable, or empty.
    Fail(&'static str),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass(reason) => write!(f, "PASS ({reason})"),
            Verdict::Warn(reason) => write!(f, "WARN ({reason})"),
            Verdict::Fail(reason) => write!(f, "FAIL ({reason})"),
        }
    }
}

/// `/api/trends` response, read leniently: the schema belongs to the
/// dashboard and missing fields must not fail the parse.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrendsResponse {
    pub success: bool,
    pub sources: Vec<String>,
    pub trends: Vec<serde_json::Value>,
}

/// `/api/youtube` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct YoutubeResponse {
    pub success: bool,
    pub categories: Vec<VideoCategory>,
}

/// One category block in the YouTube response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoCategory {
    pub videos: Vec<Video>,
}

/// One video entry; only the id matters for fallback detection.
#[allow(non_snake_case)]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Video {
    pub videoId: String,
}

/// `/api/humor` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HumorResponse {
    pub success: bool,
    pub posts: Vec<HumorPost>,
}

/// One humor post entry; only the title is sampled.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HumorPost {
    pub title: String,
}

/// Classify a trends response. Fallback markers win over everything,
/// including a non-empty trend list.
pub fn classify_trends(resp: &TrendsResponse) -> Verdict {
    if resp
        .sources
        .iter()
        .any(|s| FALLBACK_SOURCE_MARKERS.contains(&s.as_str()))
    {
        return Verdict::Warn("Using Fallback/Mock Data");
    }
    if resp.trends.is_empty() {
        return Verdict::Fail("No Data");
    }
    Verdict::Pass("Live Data")
}

/// Classify a YouTube response. One fallback video anywhere taints the
/// whole response, even alongside live entries.
pub fn classify_youtube(resp: &YoutubeResponse) -> Verdict {
    let is_fallback = resp
        .categories
        .iter()
        .flat_map(|c| &c.videos)
        .any(|v| v.videoId == FALLBACK_VIDEO_ID);
    if is_fallback {
        return Verdict::Warn("Using Hardcoded Fallback");
    }
    let total_videos: usize = resp.categories.iter().map(|c| c.videos.len()).sum();
    if total_videos == 0 {
        return Verdict::Fail("No Data");
    }
    Verdict::Pass("Live Data")
}

/// Classify a humor response.
pub fn classify_humor(resp: &HumorResponse) -> Verdict {
    if resp.posts.is_empty() {
        return Verdict::Fail("No Data or Parsing Failed");
    }
    Verdict::Pass("Live Data")
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, Box<dyn Error>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(serde_json::from_str(&body)?)
}

/// Check `/api/trends`, printing diagnostics to stdout.
pub async fn check_trends(client: &Client, base_url: &str) -> Verdict {
    let url = format!("{base_url}/api/trends");
    println!("\nChecking Trends ({url})...");

    let resp: TrendsResponse = match fetch_json(client, &url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(%url, error = %e, "Trends endpoint unreachable or unparsable");
            return Verdict::Fail("Connection/Parse Error");
        }
    };

    println!("  - Success: {}", resp.success);
    println!("  - Count: {}", resp.trends.len());
    println!("  - Sources: {}", resp.sources.join(", "));

    classify_trends(&resp)
}

/// Check `/api/youtube`, printing diagnostics to stdout.
pub async fn check_youtube(client: &Client, base_url: &str) -> Verdict {
    let url = format!("{base_url}/api/youtube");
    println!("\nChecking YouTube ({url})...");

    let resp: YoutubeResponse = match fetch_json(client, &url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(%url, error = %e, "YouTube endpoint unreachable or unparsable");
            return Verdict::Fail("Connection/Parse Error");
        }
    };

    let total_videos: usize = resp.categories.iter().map(|c| c.videos.len()).sum();
    println!("  - Success: {}", resp.success);
    println!("  - Total Videos: {total_videos}");

    classify_youtube(&resp)
}

/// Check `/api/humor`, printing diagnostics (including a sample title)
/// to stdout.
pub async fn check_humor(client: &Client, base_url: &str) -> Verdict {
    let url = format!("{base_url}/api/humor");
    println!("\nChecking Humor ({url})...");

    let resp: HumorResponse = match fetch_json(client, &url).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(%url, error = %e, "Humor endpoint unreachable or unparsable");
            return Verdict::Fail("Connection/Parse Error");
        }
    };

    println!("  - Success: {}", resp.success);
    println!("  - Count: {}", resp.posts.len());

    if let Some(first) = resp.posts.first() {
        println!("  - Sample: {}", first.title);
    }

    classify_humor(&resp)
}

/// Print the framed three-line summary table.
pub fn print_summary(trends: &Verdict, youtube: &Verdict, humor: &Verdict) {
    let bar = "=".repeat(40);
    println!("\n{bar}");
    println!("VERIFICATION SUMMARY");
    println!("{bar}");
    println!("Trends:  {trends}");
    println!("YouTube: {youtube}");
    println!("Humor:   {humor}");
    println!("{bar}");
}
