//! Summarize every article of an alert feed into a CSV file.
//!
//! ```sh
//! GOOGLE_ALERTS_RSS_FEED_URL=https://www.google.com/alerts/feeds/1/2 feed_digest
//! ```

use clap::Parser;
use feed_summarizer::cli::FeedDigestCli;
use feed_summarizer::config::FeedDigestConfig;
use feed_summarizer::fetch::build_client;
use feed_summarizer::pipeline;
use feed_summarizer::{telemetry, utils};
use std::error::Error;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    telemetry::init();

    let start_time = std::time::Instant::now();
    info!("feed_digest starting up");

    let config = match FeedDigestConfig::try_from(FeedDigestCli::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Error: Google Alerts RSS feed URL not found in environment");
            return Err(e.into());
        }
    };

    if let Err(e) = utils::ensure_writable_parent(&config.output).await {
        error!(path = %config.output.display(), error = %e, "Output location is not writable");
        return Err(e);
    }

    let client = build_client(&config.http)?;
    let stats = pipeline::run_feed_digest(&config, &client, &mut std::io::stdout()).await?;

    let elapsed = start_time.elapsed();
    if let Some(stats) = stats {
        info!(
            path = %config.output.display(),
            total = stats.total,
            empty = stats.empty,
            secs = elapsed.as_secs(),
            millis = elapsed.subsec_millis(),
            "Execution complete"
        );
    }
    Ok(())
}
