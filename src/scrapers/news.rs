//! Mars news extractor.
//!
//! Scrapes the most recent headline and its teaser paragraph from the
//! NASA Mars news listing. Only the first item of the list is taken; the
//! pipeline has no use for the rest of the feed.

use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

use crate::navigator::{self, Readiness};
use crate::session::{ScrapeConfig, Session};

const NEWS_URL: &str = "https://mars.nasa.gov/news/";
const SLIDE_SELECTOR: &str = "ul.item_list li.slide";

/// Extract the latest news headline and teaser.
///
/// Catches navigation failures and structural lookup failures; both yield
/// the `(None, None)` pair. The two fields fail together: a listing with
/// a headline but no teaser counts as a failed extraction.
#[instrument(level = "info", skip_all)]
pub async fn scrape(
    session: &mut Session,
    config: &ScrapeConfig,
) -> (Option<String>, Option<String>) {
    let readiness = Readiness::new(SLIDE_SELECTOR, config.readiness_wait);
    let document = match navigator::goto(session, NEWS_URL, Some(readiness)).await {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, url = NEWS_URL, "news navigation failed; leaving fields empty");
            return (None, None);
        }
    };

    let (title, paragraph) = parse_news(&document);
    match &title {
        Some(title) => info!(%title, "extracted news headline"),
        None => warn!(url = NEWS_URL, "news listing missing expected elements"),
    }
    (title, paragraph)
}

/// Pull the title and teaser out of the first listing slide.
fn parse_news(document: &Html) -> (Option<String>, Option<String>) {
    let slide_selector = Selector::parse(SLIDE_SELECTOR).unwrap();
    let title_selector = Selector::parse("div.content_title").unwrap();
    let teaser_selector = Selector::parse("div.article_teaser_body").unwrap();

    let Some(slide) = document.select(&slide_selector).next() else {
        return (None, None);
    };

    let title = slide.select(&title_selector).next().map(super::element_text);
    let teaser = slide.select(&teaser_selector).next().map(super::element_text);

    // Paired failure: never a title without its paragraph or vice versa.
    match (title, teaser) {
        (Some(title), Some(teaser)) => (Some(title), Some(teaser)),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_extracts_first_slide() {
        let html = Html::parse_document(
            r#"
            <ul class="item_list">
              <li class="slide">
                <div class="content_title">Mars Helicopter Flies Again</div>
                <div class="article_teaser_body">The craft completed its 50th flight.</div>
              </li>
              <li class="slide">
                <div class="content_title">Older Story</div>
                <div class="article_teaser_body">Older teaser.</div>
              </li>
            </ul>
            "#,
        );

        let (title, paragraph) = parse_news(&html);
        assert_eq!(title.as_deref(), Some("Mars Helicopter Flies Again"));
        assert_eq!(
            paragraph.as_deref(),
            Some("The craft completed its 50th flight.")
        );
    }

    #[test]
    fn test_missing_teaser_nulls_both_fields() {
        let html = Html::parse_document(
            r#"
            <ul class="item_list">
              <li class="slide">
                <div class="content_title">Headline Without Teaser</div>
              </li>
            </ul>
            "#,
        );

        assert_eq!(parse_news(&html), (None, None));
    }

    #[test]
    fn test_missing_title_nulls_both_fields() {
        let html = Html::parse_document(
            r#"
            <ul class="item_list">
              <li class="slide">
                <div class="article_teaser_body">Teaser without headline.</div>
              </li>
            </ul>
            "#,
        );

        assert_eq!(parse_news(&html), (None, None));
    }

    #[test]
    fn test_missing_listing_nulls_both_fields() {
        let html = Html::parse_document("<div>No news container here</div>");
        assert_eq!(parse_news(&html), (None, None));
    }
}
