//! Hemisphere image extractor.
//!
//! The hemisphere search listing links to four detail pages, each carrying
//! a title and a full-resolution sample image. The listing offers no
//! stable identity for its entries, so the four are visited positionally,
//! in document order, via click and back-navigation on the shared session.
//!
//! Element handles go stale the moment the page navigates, so the listing
//! links are re-resolved from scratch on every pass of the loop; handles
//! resolved before a back-navigation must not be reused after it.

use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::error::ScrapeError;
use crate::models::HemisphereEntry;
use crate::navigator::{self, Readiness};
use crate::session::{ScrapeConfig, Session};

const SEARCH_URL: &str =
    "https://astrogeology.usgs.gov/search/results?q=hemisphere+enhanced&k1=target&v1=Mars";
const RESULT_LINK_SELECTOR: &str = "a.product-item h3";
const SAMPLE_LINK_TEXT: &str = "Sample";

/// How many hemisphere entries the listing is expected to carry.
pub const HEMISPHERE_COUNT: usize = 4;

/// Extract the four hemisphere entries, in listing order.
///
/// The result always has length [`HEMISPHERE_COUNT`]. Navigation,
/// interaction, and structural lookup failures are caught per entry and
/// produce a double-`None` entry in that position; a listing that cannot
/// be reached at all produces four of them.
#[instrument(level = "info", skip_all)]
pub async fn scrape(session: &mut Session, config: &ScrapeConfig) -> Vec<HemisphereEntry> {
    let readiness = Readiness::new(RESULT_LINK_SELECTOR, config.readiness_wait);
    let listing = match navigator::goto(session, SEARCH_URL, Some(readiness)).await {
        Ok(listing) => listing,
        Err(e) => {
            warn!(error = %e, url = SEARCH_URL, "hemisphere listing navigation failed");
            return vec![HemisphereEntry::default(); HEMISPHERE_COUNT];
        }
    };
    debug!(order = ?listing_order(&listing), "hemisphere listing order");

    let mut entries = Vec::with_capacity(HEMISPHERE_COUNT);
    for index in 0..HEMISPHERE_COUNT {
        let entry = match visit_hemisphere(session, index).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(index, error = %e, "hemisphere visit failed; recording empty entry");
                HemisphereEntry::default()
            }
        };
        entries.push(entry);
    }

    let complete = entries.iter().filter(|e| e.is_complete()).count();
    info!(complete, total = HEMISPHERE_COUNT, "extracted hemisphere entries");
    entries
}

/// Click the i-th listing link, extract the detail page, navigate back.
async fn visit_hemisphere(
    session: &mut Session,
    index: usize,
) -> Result<HemisphereEntry, ScrapeError> {
    // Fresh handles every pass: the previous iteration's back-navigation
    // re-rendered the listing and invalidated everything resolved before it.
    let links = session.page.find_elements(RESULT_LINK_SELECTOR).await?;
    let link = links.get(index).ok_or_else(|| ScrapeError::MissingElement {
        selector: format!("{RESULT_LINK_SELECTOR}[{index}]"),
    })?;

    link.click().await?;
    let document = navigator::after_click(session).await?;
    let entry = parse_hemisphere(&document);

    navigator::go_back(session).await?;
    Ok(entry)
}

/// Pull the title and sample image URL out of a detail page.
///
/// The image URL is the `href` of the link whose visible text is exactly
/// `Sample`. Both fields null together on any lookup failure.
fn parse_hemisphere(document: &Html) -> HemisphereEntry {
    let title_selector = Selector::parse("h2.title").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(super::element_text);
    let img_url = document
        .select(&link_selector)
        .find(|link| super::element_text(*link) == SAMPLE_LINK_TEXT)
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string);

    HemisphereEntry::paired(title, img_url)
}

/// Titles of the listing's result links, in document order.
fn listing_order(document: &Html) -> Vec<String> {
    let link_selector = Selector::parse(RESULT_LINK_SELECTOR).unwrap();
    document
        .select(&link_selector)
        .map(super::element_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hemisphere_extracts_title_and_sample() {
        let html = Html::parse_document(
            r#"
            <h2 class="title">Cerberus Hemisphere Enhanced</h2>
            <div class="downloads">
              <a href="https://astrogeology.usgs.gov/cache/images/cerberus.tif">Original</a>
              <a href="https://astrogeology.usgs.gov/cache/images/cerberus_full.jpg">Sample</a>
            </div>
            "#,
        );

        let entry = parse_hemisphere(&html);
        assert_eq!(entry.title.as_deref(), Some("Cerberus Hemisphere Enhanced"));
        assert_eq!(
            entry.img_url.as_deref(),
            Some("https://astrogeology.usgs.gov/cache/images/cerberus_full.jpg")
        );
    }

    #[test]
    fn test_sample_match_is_exact_text() {
        // "Sample Viewer" must not satisfy the exact-text match.
        let html = Html::parse_document(
            r#"
            <h2 class="title">Schiaparelli Hemisphere Enhanced</h2>
            <a href="https://example.com/viewer">Sample Viewer</a>
            "#,
        );

        assert_eq!(parse_hemisphere(&html), HemisphereEntry::default());
    }

    #[test]
    fn test_missing_title_nulls_both_fields() {
        let html = Html::parse_document(
            r#"<a href="https://example.com/full.jpg">Sample</a>"#,
        );

        assert_eq!(parse_hemisphere(&html), HemisphereEntry::default());
    }

    #[test]
    fn test_missing_sample_link_nulls_both_fields() {
        let html = Html::parse_document(r#"<h2 class="title">Syrtis Major Hemisphere</h2>"#);

        assert_eq!(parse_hemisphere(&html), HemisphereEntry::default());
    }

    #[test]
    fn test_listing_order_is_document_order() {
        let html = Html::parse_document(
            r#"
            <a class="product-item" href="/c"><h3>Cerberus</h3></a>
            <a class="product-item" href="/a"><h3>Arabia</h3></a>
            <a class="product-item" href="/b"><h3>Boreum</h3></a>
            <a class="product-item" href="/d"><h3>Deuteronilus</h3></a>
            "#,
        );

        assert_eq!(
            listing_order(&html),
            vec!["Cerberus", "Arabia", "Boreum", "Deuteronilus"]
        );
    }
}
