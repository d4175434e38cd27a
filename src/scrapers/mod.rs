//! Community-board scrapers, one module per source site.
//!
//! Each scraper exposes the same surface:
//! - a listing-URL constant
//! - `scrape(&Client) -> Vec<HumorItem>`: fetch the listing page, never
//!   fails (transport errors log and yield an empty batch)
//! - `extract(&str) -> Vec<HumorItem>`: pure HTML-to-items parsing, so
//!   tests run on fixture pages without any network
//!
//! # Supported Sources
//!
//! | Site | Module | Listing | Notes |
//! |------|--------|---------|-------|
//! | 개드립 | [`dogdrip`] | /dogdrip | skips notice/rule posts |
//! | 인스티즈 | [`instiz`] | front page | comment counts from `span.cmt` |
//! | 디시인사이드 | [`dcinside`] | dcbest gallery | view + recommend counts |
//! | 웃긴대학 | [`humoruniv`] | mobile board | served in EUC-KR, capped haul |
//! | 더쿠 | [`theqoo`] | /hot | board table rows |
//!
//! The boards' markup is an unversioned external contract; selectors
//! break when a site redesigns, and the failure mode is an empty batch,
//! not an error.

pub mod dcinside;
pub mod dogdrip;
pub mod humoruniv;
pub mod instiz;
pub mod theqoo;

use crate::models::HumorItem;
use reqwest::Client;
use scraper::ElementRef;
use tracing::info;

/// Concatenate an element's text nodes, trimming each fragment.
///
/// Board titles often interleave markup (icons, badges, highlights);
/// trimming per-fragment collapses the surrounding indentation whitespace
/// without inventing separators inside the title.
pub(crate) fn stripped_text(el: &ElementRef) -> String {
    el.text().map(str::trim).collect()
}

/// Run all five site scrapers concurrently and flatten their output in
/// fixed site order.
///
/// Selection must only happen over the complete collection, so this
/// joins all five before returning.
pub async fn scrape_all(client: &Client) -> Vec<HumorItem> {
    let (dogdrip, instiz, dcinside, humoruniv, theqoo) = tokio::join!(
        dogdrip::scrape(client),
        instiz::scrape(client),
        dcinside::scrape(client),
        humoruniv::scrape(client),
        theqoo::scrape(client),
    );

    let items = vec![dogdrip, instiz, dcinside, humoruniv, theqoo]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    info!(count = items.len(), "Collected humor posts from all sites");
    items
}
