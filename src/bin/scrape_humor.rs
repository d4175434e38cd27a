//! # scrape-humor
//!
//! Scrapes five Korean community boards for humor posts, interleaves the
//! results round-robin by site, enriches the top 10 with detail-page
//! metadata, and writes `humor_trends.json` into the working directory.
//!
//! ## Usage
//!
//! ```sh
//! scrape-humor
//! ```
//!
//! Every failure is local: a board that blocks the request simply
//! contributes nothing this run, and the snapshot is written regardless.

use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use humor_trends::cli::ScrapeCli;
use humor_trends::models::{HumorItem, TrendSnapshot, SNAPSHOT_SUMMARY};
use humor_trends::{details, net, outputs, scrapers, select, utils};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("scrape-humor starting up");

    let _args = ScrapeCli::parse();

    let client = net::browser_client()?;

    // ---- Scrape all five boards ----
    let all_items = scrapers::scrape_all(&client).await;

    // ---- Round-robin selection ----
    let selected = select::select_top(all_items, select::TOP_LIMIT);
    info!(count = selected.len(), "Selected posts for the snapshot");

    // ---- Enrich sequentially (rate-limited per fetch) ----
    info!("Fetching details for selected posts");
    let client_ref = &client;
    let contents: Vec<HumorItem> = stream::iter(selected)
        .then(|mut item| async move {
            debug!(url = %item.sourceUrl, "Fetching detail page");
            let article = details::enrich(client_ref, &item.sourceUrl).await;
            item.summary = article.summary;
            item.thumbnailUrl = article.thumbnail_url;
            item.category = article.category;
            item.publishedAt = utils::now_iso_z();
            item
        })
        .collect()
        .await;

    // ---- Build and write the snapshot ----
    let top_sites = select::site_counts(&contents);
    let snapshot = TrendSnapshot {
        generatedAt: utils::now_iso_z(),
        summary: SNAPSHOT_SUMMARY.to_string(),
        contents,
        topSites: top_sites,
    };

    outputs::json::write_snapshot(&snapshot).await?;

    let elapsed = start_time.elapsed();
    info!(
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        items = snapshot.contents.len(),
        "Execution complete"
    );

    Ok(())
}
