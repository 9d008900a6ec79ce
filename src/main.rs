//! # Mars Scrape
//!
//! Binary entry point: scrape every Mars source once and write the
//! assembled record as JSON.
//!
//! ## Pipeline
//!
//! 1. **Session**: launch one headless browser for the run
//! 2. **Extraction**: news, featured image, weather, hemispheres over the
//!    shared session; facts via a direct fetch
//! 3. **Output**: write the timestamped record under the output directory
//!
//! ## Usage
//!
//! ```sh
//! mars_scrape -o ./records
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use mars_scrape::cli::Cli;
use mars_scrape::outputs::json;
use mars_scrape::scrape_all;
use mars_scrape::utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("mars_scrape starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output_dir, ?args.chrome_executable, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Scrape every source ----
    let config = args.scrape_config();
    let record = match scrape_all(&config).await {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "scrape run aborted");
            return Err(e.into());
        }
    };

    // ---- JSON output ----
    let path = json::write_record(&record, &args.output_dir).await?;
    info!(path = %path, "record written");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
