//! Round-robin selection across site buckets.
//!
//! The snapshot deliberately spreads representation across boards instead
//! of ranking by view or like counts: items are bucketed per site and
//! consumed one per site per round, in [`Site::SCRAPE_ORDER`], until the
//! cap is hit. Exhausted buckets are skipped; the cap can cut a round
//! short mid-way.

use crate::models::{HumorItem, Site, SiteCount};
use itertools::Itertools;
use std::collections::{HashMap, VecDeque};

/// Number of posts carried into the snapshot.
pub const TOP_LIMIT: usize = 10;

/// Interleave items round-robin by source site, capped at `limit`.
///
/// Within a bucket the listing order is preserved, so each round takes
/// each site's next-best unconsumed post.
pub fn select_top(items: Vec<HumorItem>, limit: usize) -> Vec<HumorItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut buckets: HashMap<Site, VecDeque<HumorItem>> = items
        .into_iter()
        .map(|item| (item.sourceSite, item))
        .into_group_map()
        .into_iter()
        .map(|(site, posts)| (site, VecDeque::from(posts)))
        .collect();

    let mut selected = Vec::with_capacity(limit);
    loop {
        let mut advanced = false;
        for site in Site::SCRAPE_ORDER {
            let Some(bucket) = buckets.get_mut(&site) else {
                continue;
            };
            let Some(item) = bucket.pop_front() else {
                continue;
            };
            selected.push(item);
            advanced = true;
            if selected.len() >= limit {
                return selected;
            }
        }
        if !advanced {
            break;
        }
    }

    selected
}

/// Per-site tallies over the selected posts, always all five sites in
/// [`Site::REPORT_ORDER`], zero counts included.
pub fn site_counts(selected: &[HumorItem]) -> Vec<SiteCount> {
    Site::REPORT_ORDER
        .iter()
        .map(|&site| SiteCount {
            site,
            count: selected
                .iter()
                .filter(|item| item.sourceSite == site)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(site: Site, n: usize) -> HumorItem {
        HumorItem::new(site, format!("{site} {n}"), format!("https://example.com/{n}"))
    }

    fn bucket(site: Site, count: usize) -> Vec<HumorItem> {
        (1..=count).map(|n| item(site, n)).collect()
    }

    #[test]
    fn test_round_robin_asymmetric_buckets_exact_order() {
        // A=Dogdrip:3, B=Instiz:1, C=DcInside:6 consumed in scrape order.
        let mut items = Vec::new();
        items.extend(bucket(Site::Dogdrip, 3));
        items.extend(bucket(Site::Instiz, 1));
        items.extend(bucket(Site::DcInside, 6));

        let selected = select_top(items, 10);
        let titles: Vec<&str> = selected.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "개드립 1",
                "인스티즈 1",
                "디시인사이드 1",
                "개드립 2",
                "디시인사이드 2",
                "개드립 3",
                "디시인사이드 3",
                "디시인사이드 4",
                "디시인사이드 5",
                "디시인사이드 6",
            ]
        );
    }

    #[test]
    fn test_round_robin_stops_mid_round_at_cap() {
        let mut items = Vec::new();
        for site in Site::SCRAPE_ORDER {
            items.extend(bucket(site, 3));
        }

        // 15 candidates, cap 10: two full rounds of five.
        let selected = select_top(items, 10);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected[9].title, "더쿠 2");

        // cap 7 cuts the second round after Dogdrip and Instiz.
        let mut items = Vec::new();
        for site in Site::SCRAPE_ORDER {
            items.extend(bucket(site, 3));
        }
        let selected = select_top(items, 7);
        assert_eq!(selected[5].title, "개드립 2");
        assert_eq!(selected[6].title, "인스티즈 2");
    }

    #[test]
    fn test_select_fewer_items_than_cap() {
        let items = bucket(Site::Theqoo, 4);
        let selected = select_top(items, 10);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_select_empty_input() {
        assert!(select_top(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_site_counts_report_order_with_zeros() {
        let mut items = bucket(Site::DcInside, 2);
        items.extend(bucket(Site::Dogdrip, 1));

        let counts = site_counts(&items);
        let sites: Vec<Site> = counts.iter().map(|c| c.site).collect();
        assert_eq!(sites, Site::REPORT_ORDER);

        let tally: Vec<usize> = counts.iter().map(|c| c.count).collect();
        // report order: 개드립, 인스티즈, 더쿠, 디시인사이드, 웃긴대학
        assert_eq!(tally, [1, 0, 0, 2, 0]);
        assert_eq!(tally.iter().sum::<usize>(), items.len());
    }
}
