//! HTTP client construction and page-fetch helpers.
//!
//! Both tools issue plain GETs with a 10-second timeout and no cookie
//! persistence. The scraper carries a full browser-like header set to get
//! past the boards' anti-bot filtering; the verifier identifies itself
//! honestly with a compatible-token user-agent.

use encoding_rs::EUC_KR;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout applied to every client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Desktop Chrome user-agent sent by the scraper.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// User-agent sent by the endpoint verifier.
pub const VERIFIER_USER_AGENT: &str = "Mozilla/5.0 (compatible; CrawlerVerifier/1.0)";

/// Build the scraper's client: browser user-agent plus the Accept,
/// language, referer, and Sec-Fetch headers a real navigation would send.
pub fn browser_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
             image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://www.google.com/"),
    );
    headers.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static("1"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("cross-site"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );

    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Build the verifier's client.
pub fn verifier_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(VERIFIER_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// GET a page and return its body as text. Non-2xx statuses are errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// GET a page served in EUC-KR and decode it to UTF-8.
///
/// Decoding must happen from the raw bytes; `text()` would trust the
/// (absent or wrong) charset declaration and mangle the Hangul.
pub async fn fetch_html_euc_kr(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let (text, _, _) = EUC_KR.decode(&bytes);
    Ok(text.into_owned())
}
