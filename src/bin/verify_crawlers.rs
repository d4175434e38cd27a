//! # verify-crawlers
//!
//! Probes a running dashboard's `/api/trends`, `/api/youtube`, and
//! `/api/humor` endpoints and prints a PASS/WARN/FAIL verdict for each,
//! flagging responses that carry recognizable fallback or mock data.
//!
//! ## Usage
//!
//! ```sh
//! verify-crawlers                      # defaults to http://localhost:3000
//! verify-crawlers https://trends.example.com
//! ```
//!
//! Purely informational: the report goes to stdout, diagnostics to
//! stderr, and the exit code is always 0.

use clap::Parser;
use std::error::Error;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use humor_trends::cli::VerifyCli;
use humor_trends::{net, verify};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr; stdout is the report) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = VerifyCli::parse();

    println!("Starting Deep Verification on {}", args.base_url);

    let client = net::verifier_client()?;

    // The three checks are independent; run them in a fixed order so the
    // diagnostic output stays readable.
    let trends = verify::check_trends(&client, &args.base_url).await;
    let youtube = verify::check_youtube(&client, &args.base_url).await;
    let humor = verify::check_humor(&client, &args.base_url).await;

    verify::print_summary(&trends, &youtube, &humor);

    Ok(())
}
