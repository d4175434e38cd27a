//! End-to-end pipeline test over canned listing pages.
//!
//! Drives extraction, round-robin selection, tallying, and serialization
//! exactly as the binary does, minus the network: one fixture page per
//! site with known item counts.

use humor_trends::models::{Site, TrendSnapshot, SNAPSHOT_SUMMARY};
use humor_trends::outputs::json::render;
use humor_trends::scrapers::{dcinside, dogdrip, humoruniv, instiz, theqoo};
use humor_trends::select::{select_top, site_counts, TOP_LIMIT};

const DOGDRIP_PAGE: &str = include_str!("fixtures/dogdrip.html");
const INSTIZ_PAGE: &str = include_str!("fixtures/instiz.html");
const DCINSIDE_PAGE: &str = include_str!("fixtures/dcinside.html");
const HUMORUNIV_PAGE: &str = include_str!("fixtures/humoruniv.html");
const THEQOO_PAGE: &str = include_str!("fixtures/theqoo.html");

// Usable items per fixture, after each site's exclusion rules.
const FIXTURE_COUNTS: [(Site, usize); 5] = [
    (Site::Dogdrip, 3),
    (Site::Instiz, 2),
    (Site::DcInside, 4),
    (Site::HumorUniv, 2),
    (Site::Theqoo, 1),
];

fn collect_all() -> Vec<humor_trends::models::HumorItem> {
    let mut items = Vec::new();
    items.extend(dogdrip::extract(DOGDRIP_PAGE));
    items.extend(instiz::extract(INSTIZ_PAGE));
    items.extend(dcinside::extract(DCINSIDE_PAGE));
    items.extend(humoruniv::extract(HUMORUNIV_PAGE));
    items.extend(theqoo::extract(THEQOO_PAGE));
    items
}

#[test]
fn test_fixture_extraction_counts() {
    let items = collect_all();
    for (site, expected) in FIXTURE_COUNTS {
        let found = items.iter().filter(|i| i.sourceSite == site).count();
        assert_eq!(found, expected, "unexpected item count for {site}");
    }
}

#[test]
fn test_extracted_links_are_absolute() {
    for item in collect_all() {
        assert!(
            item.sourceUrl.starts_with("http://") || item.sourceUrl.starts_with("https://"),
            "relative link leaked through: {}",
            item.sourceUrl
        );
    }
}

#[test]
fn test_selection_length_and_tallies() {
    let total: usize = FIXTURE_COUNTS.iter().map(|(_, n)| n).sum();
    let items = collect_all();
    assert_eq!(items.len(), total);

    let selected = select_top(items, TOP_LIMIT);
    assert_eq!(selected.len(), TOP_LIMIT.min(total));

    let counts = site_counts(&selected);
    assert_eq!(counts.len(), 5);
    let sites: Vec<Site> = counts.iter().map(|c| c.site).collect();
    assert_eq!(sites, Site::REPORT_ORDER);
    assert_eq!(
        counts.iter().map(|c| c.count).sum::<usize>(),
        selected.len()
    );
}

#[test]
fn test_selection_interleaves_sites() {
    let selected = select_top(collect_all(), TOP_LIMIT);

    // First round visits every site once, in scrape order.
    let first_round: Vec<Site> = selected.iter().take(5).map(|i| i.sourceSite).collect();
    assert_eq!(first_round, Site::SCRAPE_ORDER);

    // Second round skips nothing yet except the exhausted 더쿠 bucket.
    let second_round: Vec<Site> = selected.iter().skip(5).map(|i| i.sourceSite).collect();
    assert_eq!(
        second_round,
        [
            Site::Dogdrip,
            Site::Instiz,
            Site::DcInside,
            Site::HumorUniv,
            Site::Dogdrip,
        ]
    );
}

#[test]
fn test_snapshot_serialization_shape() {
    let selected = select_top(collect_all(), TOP_LIMIT);
    let top_sites = site_counts(&selected);
    let snapshot = TrendSnapshot {
        generatedAt: "2026-08-07T09:00:00.000000Z".to_string(),
        summary: SNAPSHOT_SUMMARY.to_string(),
        contents: selected,
        topSites: top_sites,
    };

    let json = render(&snapshot).unwrap();

    // 2-space indentation, camelCase keys, unescaped Korean.
    assert!(json.contains("\n  \"generatedAt\""));
    assert!(json.contains("\"topSites\""));
    assert!(json.contains("개드립"));
    assert!(!json.contains("\\u"));

    // The document round-trips.
    let back: TrendSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.contents.len(), snapshot.contents.len());
    assert_eq!(back.topSites.len(), 5);
}
