//! Browser session lifecycle.
//!
//! One [`Session`] is started per scrape run and owns everything the run
//! shares: the headless Chromium process, the background task draining its
//! CDP event stream, the single page every extractor drives, and the
//! explicit navigation history that back-navigation depends on.
//!
//! Startup is the only fatal failure in the pipeline. Shutdown is
//! best-effort: errors while closing the browser are logged and suppressed
//! so a flaky teardown can never mask a successfully scraped record.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::error::ScrapeError;

/// Tunables for one scrape run.
#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    /// Browser binary to launch. When `None`, chromiumoxide autodetects an
    /// installed Chrome or Chromium.
    pub chrome_executable: Option<PathBuf>,
    /// Upper bound on each page readiness wait.
    pub readiness_wait: Duration,
    /// Timeout for the facts page fetch, which bypasses the browser.
    pub fetch_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            chrome_executable: None,
            readiness_wait: Duration::from_secs(2),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

/// A running headless browser, exclusively owned by one scrape run.
///
/// `history` mirrors the browser's navigation stack: the navigator pushes
/// on every forward navigation it performs or observes, and pops on
/// back-navigation.
pub struct Session {
    pub(crate) browser: Browser,
    pub(crate) page: Page,
    pub(crate) history: Vec<String>,
    event_loop: JoinHandle<()>,
}

impl Session {
    /// Launch a headless browser and open the page the run will drive.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::SessionStart`] when the engine cannot be
    /// configured or launched (binary missing, incompatible build). There
    /// is no retry; callers are expected to abort the run.
    #[instrument(level = "info", skip_all)]
    pub async fn start(config: &ScrapeConfig) -> Result<Session, ScrapeError> {
        let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ]);
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(ScrapeError::SessionStart)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::SessionStart(e.to_string()))?;
        debug!("headless browser launched");

        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        // Let the browser settle before opening the first page.
        sleep(Duration::from_millis(300)).await;

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::SessionStart(e.to_string()))?;
        info!("browser session started");

        Ok(Session {
            browser,
            page,
            history: Vec::new(),
            event_loop,
        })
    }

    /// Release the browser and every resource attached to it.
    ///
    /// Best-effort: failures are logged and suppressed. Taking `self` by
    /// value means a session can only ever be released once.
    #[instrument(level = "info", skip_all)]
    pub async fn stop(mut self) {
        if let Err(e) = self.page.close().await {
            debug!(error = %e, "page close failed during shutdown");
        }
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "browser close failed during shutdown");
        }
        if let Err(e) = self.browser.wait().await {
            debug!(error = %e, "browser process did not exit cleanly");
        }
        self.event_loop.abort();
        info!("browser session released");
    }
}
