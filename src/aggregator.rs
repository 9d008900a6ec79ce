//! Run orchestration: one session, every source, one record.
//!
//! [`scrape_all`] is the crate's entry point. It owns the session for the
//! whole run, drives each extractor in a fixed order, and composes their
//! partial results into a [`ScrapeRecord`]. The extractor phase is total
//! (every source converts its own failures to null fields), so the only
//! error a caller can see is the browser failing to start.

use chrono::Local;
use tracing::{info, instrument};

use crate::error::ScrapeError;
use crate::models::ScrapeRecord;
use crate::scrapers::{facts, featured_image, hemispheres, news, weather};
use crate::session::{ScrapeConfig, Session};

/// Scrape every source and return the assembled record.
///
/// Sources are attempted exactly once each, sequentially: news, featured
/// image, weather, hemispheres over the shared browser session, then the
/// session-independent facts fetch. The session is released on the single
/// return path, after the extractor phase completes; because that phase
/// never errs, a run that starts a browser always releases it.
///
/// # Errors
///
/// [`ScrapeError::SessionStart`] when the headless browser cannot be
/// launched. No partial record is produced in that case.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all(config: &ScrapeConfig) -> Result<ScrapeRecord, ScrapeError> {
    let mut session = Session::start(config).await?;

    let (news_title, news_paragraph) = news::scrape(&mut session, config).await;
    let featured_image = featured_image::scrape(&mut session, config).await;
    let weather = weather::scrape(&mut session, config).await;
    let hemispheres = hemispheres::scrape(&mut session, config).await;
    let facts = facts::scrape(config).await;

    let record = ScrapeRecord {
        news_title,
        news_paragraph,
        featured_image,
        hemispheres,
        weather,
        facts,
        last_modified: Local::now(),
    };

    session.stop().await;

    info!(
        news = record.news_title.is_some(),
        image = record.featured_image.is_some(),
        weather = record.weather.is_some(),
        facts = record.facts.is_some(),
        hemispheres_complete = record
            .hemispheres
            .iter()
            .filter(|entry| entry.is_complete())
            .count(),
        last_modified = %record.last_modified,
        "scrape run complete"
    );
    Ok(record)
}
