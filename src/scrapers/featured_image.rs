//! Featured image extractor.
//!
//! The gallery only reveals the full-resolution image URL after two page
//! interactions: clicking the "full image" trigger, then following the
//! "more info" link it exposes. The terminal page carries the image's
//! relative path, which is absolutized against the gallery origin.
//!
//! Any failure along the click chain (trigger missing, link never
//! appearing, navigation refused) nulls the field and lets the run
//! continue. Markup drift on this source is routine and must never cost
//! the caller the rest of the record.

use std::time::Duration;

use scraper::{Html, Selector};
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::ScrapeError;
use crate::navigator::{self, Readiness};
use crate::session::{ScrapeConfig, Session};

const GALLERY_URL: &str = "https://www.jpl.nasa.gov/spaceimages/?search=&category=Mars";
const GALLERY_ORIGIN: &str = "https://www.jpl.nasa.gov";
const FULL_IMAGE_TRIGGER: &str = "#full_image";
const MORE_INFO_TEXT: &str = "more info";
const LINK_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Extract the absolute URL of the featured Mars image.
///
/// Catches navigation, interaction, and structural lookup failures; all
/// of them yield `None`.
#[instrument(level = "info", skip_all)]
pub async fn scrape(session: &mut Session, config: &ScrapeConfig) -> Option<String> {
    let document = match drive_gallery(session, config).await {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, url = GALLERY_URL, "featured image interaction failed; leaving field empty");
            return None;
        }
    };

    let image_url = parse_featured_image(&document);
    match &image_url {
        Some(url) => info!(%url, "extracted featured image"),
        None => warn!(url = GALLERY_URL, "terminal page missing featured image element"),
    }
    image_url
}

/// Click through the gallery to the page that carries the image path.
async fn drive_gallery(session: &mut Session, config: &ScrapeConfig) -> Result<Html, ScrapeError> {
    let readiness = Readiness::new(FULL_IMAGE_TRIGGER, config.readiness_wait);
    navigator::goto(session, GALLERY_URL, Some(readiness)).await?;

    let trigger = session.page.find_element(FULL_IMAGE_TRIGGER).await?;
    trigger.click().await?;
    debug!("clicked full image trigger");

    click_more_info_link(session, config.readiness_wait).await?;
    debug!("followed more info link");

    navigator::after_click(session).await
}

/// Find and click the first link whose visible text contains "more info".
///
/// The link is injected after the trigger click, so this polls until it
/// shows up or the wait bound elapses.
async fn click_more_info_link(session: &Session, wait: Duration) -> Result<(), ScrapeError> {
    let deadline = Instant::now() + wait;
    loop {
        let links = session.page.find_elements("a").await.unwrap_or_default();
        for link in links {
            if let Ok(Some(text)) = link.inner_text().await {
                if text.to_lowercase().contains(MORE_INFO_TEXT) {
                    link.click().await?;
                    return Ok(());
                }
            }
        }
        if Instant::now() >= deadline {
            return Err(ScrapeError::MissingElement {
                selector: format!("a:contains({MORE_INFO_TEXT:?})"),
            });
        }
        sleep(LINK_POLL_INTERVAL).await;
    }
}

/// Pull the image's relative path out of the terminal document and
/// absolutize it against the gallery origin.
fn parse_featured_image(document: &Html) -> Option<String> {
    let image_selector = Selector::parse("figure.lede a img").unwrap();
    let relative = document.select(&image_selector).next()?.value().attr("src")?;

    let base = Url::parse(GALLERY_ORIGIN).ok()?;
    base.join(relative).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_featured_image_absolutizes_relative_path() {
        let html = Html::parse_document(
            r#"
            <figure class="lede">
              <a href="/spaceimages/images/largesize/PIA12345_hires.jpg">
                <img src="/spaceimages/images/largesize/PIA12345_hires.jpg" alt="Mars">
              </a>
            </figure>
            "#,
        );

        assert_eq!(
            parse_featured_image(&html).as_deref(),
            Some("https://www.jpl.nasa.gov/spaceimages/images/largesize/PIA12345_hires.jpg")
        );
    }

    #[test]
    fn test_parse_featured_image_keeps_absolute_src() {
        let html = Html::parse_document(
            r#"
            <figure class="lede">
              <a><img src="https://photojournal.jpl.nasa.gov/jpeg/PIA99999.jpg"></a>
            </figure>
            "#,
        );

        assert_eq!(
            parse_featured_image(&html).as_deref(),
            Some("https://photojournal.jpl.nasa.gov/jpeg/PIA99999.jpg")
        );
    }

    #[test]
    fn test_missing_image_element_yields_none() {
        let html = Html::parse_document("<figure class=\"lede\"><a>no image</a></figure>");
        assert_eq!(parse_featured_image(&html), None);
    }

    #[test]
    fn test_missing_src_attribute_yields_none() {
        let html = Html::parse_document(
            "<figure class=\"lede\"><a><img alt=\"srcless\"></a></figure>",
        );
        assert_eq!(parse_featured_image(&html), None);
    }
}
