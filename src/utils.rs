//! Small helpers shared by the scraper pipeline: timestamps, character
//! truncation, and lenient count parsing.

use chrono::Local;

/// Current local time in ISO-8601 with microsecond precision and a
/// literal `Z` suffix.
///
/// The dashboard's feed consumers expect the suffix on what is otherwise
/// a naive local timestamp, so it is appended verbatim rather than via
/// timezone conversion.
///
/// # Examples
///
/// ```ignore
/// assert!(now_iso_z().ends_with('Z'));
/// ```
pub fn now_iso_z() -> String {
    format!("{}Z", Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"))
}

/// Truncate a string to `max` characters and append an ellipsis marker.
///
/// Counts characters, not bytes: summaries are mostly Hangul and a byte
/// slice would split a code point. The `...` is appended even when the
/// input is already short, matching the snapshot format the dashboard
/// ingests.
pub fn ellipsize(s: &str, max: usize) -> String {
    let mut truncated: String = s.chars().take(max).collect();
    truncated.push_str("...");
    truncated
}

/// Parse a listing-page counter cell into a number, defaulting to 0.
///
/// Strict digits only: values like `"1,234"` or `"-"` fail the parse and
/// collapse to 0, which keeps counts comparable across boards that format
/// them differently.
pub fn parse_count(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso_z_shape() {
        let ts = now_iso_z();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b'T');
        // microsecond fraction present
        assert!(ts.contains('.'));
    }

    #[test]
    fn test_ellipsize_short_input_still_gets_marker() {
        assert_eq!(ellipsize("짧은 글", 100), "짧은 글...");
    }

    #[test]
    fn test_ellipsize_truncates_by_chars() {
        let long = "가".repeat(150);
        let out = ellipsize(&long, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_ellipsize_multibyte_boundary_safe() {
        let s = "유머글".repeat(50);
        let out = ellipsize(&s, 100);
        assert!(out.is_char_boundary(out.len() - 3));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count("  42  "), 42);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-"), 0);
        // comma-grouped numbers fail strict parsing and collapse to 0
        assert_eq!(parse_count("1,234"), 0);
    }
}
