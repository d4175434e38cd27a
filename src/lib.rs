//! # Humor Trends Tools
//!
//! Two small command-line utilities for the Korean trend dashboard:
//!
//! - **scrape-humor**: scrapes five community boards (개드립, 인스티즈,
//!   디시인사이드, 웃긴대학, 더쿠) for humor posts, interleaves them
//!   round-robin by site, enriches the top 10 with detail-page metadata,
//!   and writes a `humor_trends.json` snapshot.
//! - **verify-crawlers**: probes the dashboard's `/api/trends`,
//!   `/api/youtube`, and `/api/humor` endpoints and prints a PASS/WARN/FAIL
//!   verdict per endpoint, flagging responses that carry fallback or
//!   mock data.
//!
//! ## Architecture
//!
//! The scraper follows a linear pipeline:
//! 1. **Scraping**: fetch each site's listing page and extract post
//!    candidates ([`scrapers`])
//! 2. **Selection**: round-robin interleave across sites, capped at 10
//!    ([`select`])
//! 3. **Enrichment**: sequential, rate-limited detail-page fetches for
//!    summaries and thumbnails ([`details`])
//! 4. **Output**: serialize the snapshot to disk ([`outputs`])
//!
//! The verifier is a flat sequence of three independent endpoint checks
//! ([`verify`]). Every failure is local: a dead site contributes zero
//! posts, a dead endpoint yields a FAIL verdict, and both tools always
//! run to completion.

pub mod cli;
pub mod details;
pub mod models;
pub mod net;
pub mod outputs;
pub mod scrapers;
pub mod select;
pub mod utils;
pub mod verify;
