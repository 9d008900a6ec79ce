//! Mars weather extractor.
//!
//! Reads the latest weather report from the mission's social feed. The
//! report lives in a container tagged with the feed author's name, which
//! is the only stable marker the page offers.

use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

use crate::navigator::{self, Readiness};
use crate::session::{ScrapeConfig, Session};

const WEATHER_URL: &str = "https://twitter.com/marswxreport?lang=en";
const TWEET_SELECTOR: &str = "div.tweet[data-name=\"Mars Weather\"]";

/// Extract the text of the latest weather report.
///
/// Catches navigation failures and structural lookup failures; both yield
/// `None`. A feed without the tagged container degrades the field, never
/// the run.
#[instrument(level = "info", skip_all)]
pub async fn scrape(session: &mut Session, config: &ScrapeConfig) -> Option<String> {
    let readiness = Readiness::new("div.tweet", config.readiness_wait);
    let document = match navigator::goto(session, WEATHER_URL, Some(readiness)).await {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, url = WEATHER_URL, "weather navigation failed; leaving field empty");
            return None;
        }
    };

    let weather = parse_weather(&document);
    match &weather {
        Some(weather) => info!(%weather, "extracted weather report"),
        None => warn!(url = WEATHER_URL, "weather feed missing tagged report"),
    }
    weather
}

/// Pull the report text out of the tagged container.
fn parse_weather(document: &Html) -> Option<String> {
    let container_selector = Selector::parse(TWEET_SELECTOR).unwrap();
    let text_selector = Selector::parse("p.tweet-text").unwrap();

    let container = document.select(&container_selector).next()?;
    let report = container.select(&text_selector).next()?;
    Some(super::element_text(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weather_extracts_tagged_report() {
        let html = Html::parse_document(
            r#"
            <div class="tweet" data-name="Mars Weather">
              <p class="tweet-text">InSight sol 256: high -17C, low -96C, wind 12 m/s</p>
            </div>
            "#,
        );

        assert_eq!(
            parse_weather(&html).as_deref(),
            Some("InSight sol 256: high -17C, low -96C, wind 12 m/s")
        );
    }

    #[test]
    fn test_untagged_container_yields_none() {
        let html = Html::parse_document(
            r#"
            <div class="tweet" data-name="Someone Else">
              <p class="tweet-text">Unrelated chatter</p>
            </div>
            "#,
        );

        assert_eq!(parse_weather(&html), None);
    }

    #[test]
    fn test_container_without_text_element_yields_none() {
        let html = Html::parse_document(
            r#"<div class="tweet" data-name="Mars Weather"><span>no p tag</span></div>"#,
        );

        assert_eq!(parse_weather(&html), None);
    }
}
