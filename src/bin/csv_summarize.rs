//! Print a summary for every article URL listed in a CSV file.
//!
//! ```sh
//! CSV_FILE_PATH=links.csv OPENAI_API_KEY=sk-... csv_summarize
//! ```

use clap::Parser;
use feed_summarizer::cli::CsvSummarizeCli;
use feed_summarizer::config::CsvSummarizeConfig;
use feed_summarizer::fetch::build_client;
use feed_summarizer::pipeline;
use feed_summarizer::telemetry;
use std::error::Error;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    telemetry::init();

    let start_time = std::time::Instant::now();
    info!("csv_summarize starting up");

    let config = match CsvSummarizeConfig::try_from(CsvSummarizeCli::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Error: CSV file path not found in environment");
            return Err(e.into());
        }
    };

    let client = build_client(&config.http)?;
    let stats = match pipeline::run_csv_summarize(&config, &client, std::io::stdout()).await {
        Ok(stats) => stats,
        Err(e) => {
            error!(error = %e, "Could not summarize CSV articles");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        total = stats.total,
        empty = stats.empty,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
