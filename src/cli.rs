//! Command-line interface definitions for Mars Scrape.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::session::ScrapeConfig;

/// Command-line arguments for the Mars Scrape application.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// mars_scrape -o ./records
///
/// # Pointing at a specific browser binary
/// mars_scrape -o ./records --chrome-executable /usr/bin/chromium
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the JSON record
    #[arg(short, long)]
    pub output_dir: String,

    /// Path to the Chrome/Chromium binary (autodetected when omitted)
    #[arg(long, env = "CHROME_EXECUTABLE")]
    pub chrome_executable: Option<PathBuf>,

    /// Upper bound in seconds for each page readiness wait
    #[arg(long, default_value_t = 2)]
    pub readiness_wait_secs: u64,

    /// Timeout in seconds for the facts page fetch
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout_secs: u64,
}

impl Cli {
    /// Build the run configuration these arguments describe.
    pub fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            chrome_executable: self.chrome_executable.clone(),
            readiness_wait: Duration::from_secs(self.readiness_wait_secs),
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&["mars_scrape", "--output-dir", "./records"]);

        assert_eq!(cli.output_dir, "./records");
        assert_eq!(cli.readiness_wait_secs, 2);
        assert_eq!(cli.fetch_timeout_secs, 30);
        assert!(cli.chrome_executable.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["mars_scrape", "-o", "/tmp/records"]);

        assert_eq!(cli.output_dir, "/tmp/records");
    }

    #[test]
    fn test_scrape_config_from_args() {
        let cli = Cli::parse_from(&[
            "mars_scrape",
            "-o",
            "./records",
            "--readiness-wait-secs",
            "5",
            "--fetch-timeout-secs",
            "10",
        ]);
        let config = cli.scrape_config();

        assert_eq!(config.readiness_wait, Duration::from_secs(5));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }
}
