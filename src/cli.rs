//! Command-line interface definitions for both binaries.
//!
//! Defined with the `clap` derive API. Neither tool takes configuration
//! beyond this; logging verbosity comes from `RUST_LOG`.

use clap::Parser;

/// Command-line arguments for `verify-crawlers`.
///
/// # Examples
///
/// ```sh
/// # Probe a local dev server
/// verify-crawlers
///
/// # Probe a deployed instance
/// verify-crawlers https://trends.example.com
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct VerifyCli {
    /// Base URL of the dashboard instance to probe
    #[arg(default_value = "http://localhost:3000")]
    pub base_url: String,
}

/// Command-line arguments for `scrape-humor`.
///
/// The scraper takes no options: it always writes `humor_trends.json`
/// into the current working directory. The empty struct still buys
/// `--help`/`--version` and rejection of stray arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct ScrapeCli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli_default_base_url() {
        let cli = VerifyCli::parse_from(["verify-crawlers"]);
        assert_eq!(cli.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_verify_cli_positional_base_url() {
        let cli = VerifyCli::parse_from(["verify-crawlers", "https://trends.example.com"]);
        assert_eq!(cli.base_url, "https://trends.example.com");
    }

    #[test]
    fn test_scrape_cli_rejects_stray_args() {
        assert!(ScrapeCli::try_parse_from(["scrape-humor", "extra"]).is_err());
    }
}
