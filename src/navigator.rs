//! Page navigation over the shared session.
//!
//! The navigator is the only code that moves the session between URLs.
//! Each call re-fetches the page's current markup after the move and hands
//! back a freshly parsed [`Html`] document. Documents are never cached
//! across extractors, and element handles resolved before a navigation
//! must never be reused after one.
//!
//! Readiness waits are bounded and advisory: if the structural marker
//! never appears the navigator proceeds anyway and leaves the extractor
//! to degrade gracefully on whatever markup is actually there.

use std::time::Duration;

use scraper::Html;
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument, warn};

use crate::error::ScrapeError;
use crate::session::Session;

const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A structural marker to wait for after navigation, plus the wait bound.
#[derive(Clone, Copy, Debug)]
pub struct Readiness {
    pub selector: &'static str,
    pub wait: Duration,
}

impl Readiness {
    pub fn new(selector: &'static str, wait: Duration) -> Self {
        Readiness { selector, wait }
    }
}

/// Drive the session to `url` and return the resulting document.
///
/// Pushes `url` onto the session's navigation history on success. The
/// readiness wait, when given, polls for the marker until it appears or
/// the bound elapses; a timeout is logged and otherwise ignored.
///
/// # Errors
///
/// Returns [`ScrapeError::Navigation`] when the browser refuses the move
/// outright, and [`ScrapeError::Browser`] when the settled page's content
/// cannot be read.
#[instrument(level = "debug", skip(session, readiness))]
pub async fn goto(
    session: &mut Session,
    url: &str,
    readiness: Option<Readiness>,
) -> Result<Html, ScrapeError> {
    session
        .page
        .goto(url)
        .await
        .map_err(|source| ScrapeError::Navigation {
            url: url.to_string(),
            source,
        })?;
    let _ = session.page.wait_for_navigation().await;

    if let Some(ready) = readiness {
        wait_for_marker(session, ready).await;
    }

    session.history.push(url.to_string());
    current_document(session).await
}

/// Capture the document produced by a navigation the extractor triggered
/// itself (a click), recording the landing URL in the session history.
pub async fn after_click(session: &mut Session) -> Result<Html, ScrapeError> {
    let _ = session.page.wait_for_navigation().await;
    if let Ok(Some(url)) = session.page.url().await {
        session.history.push(url);
    }
    current_document(session).await
}

/// Navigate back through the session's history and return the document
/// now current.
#[instrument(level = "debug", skip_all)]
pub async fn go_back(session: &mut Session) -> Result<Html, ScrapeError> {
    if session.history.len() < 2 {
        warn!(depth = session.history.len(), "going back with a shallow history");
    }
    session.page.evaluate("history.back()").await?;
    let _ = session.page.wait_for_navigation().await;
    session.history.pop();
    current_document(session).await
}

/// Re-parse the session's current markup.
pub async fn current_document(session: &Session) -> Result<Html, ScrapeError> {
    let html = session.page.content().await?;
    Ok(Html::parse_document(&html))
}

async fn wait_for_marker(session: &Session, ready: Readiness) {
    let deadline = Instant::now() + ready.wait;
    loop {
        if session.page.find_element(ready.selector).await.is_ok() {
            debug!(selector = ready.selector, "readiness marker present");
            return;
        }
        if Instant::now() >= deadline {
            debug!(
                selector = ready.selector,
                wait_ms = ready.wait.as_millis() as u64,
                "readiness marker did not appear; proceeding anyway"
            );
            return;
        }
        sleep(READINESS_POLL_INTERVAL).await;
    }
}
