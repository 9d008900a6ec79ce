//! Data models for the scraped Mars record.
//!
//! This module defines the fixed-shape output of one scrape run:
//! - [`ScrapeRecord`]: the aggregate of every source, one per run
//! - [`HemisphereEntry`]: title and image URL for one hemisphere detail page
//!
//! Every field of the record is always present when serialized; a source
//! that failed extraction contributes `null` values rather than dropping
//! its key. Downstream consumers depend on that shape never varying.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The aggregated result of one scrape run.
///
/// Built exactly once per run by the aggregator, stamped at construction
/// time, and immutable afterwards. Individual fields are `None` when their
/// source failed; `hemispheres` always has length 4 regardless of how many
/// detail pages extracted successfully.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeRecord {
    /// Headline of the most recent Mars news item.
    pub news_title: Option<String>,
    /// Teaser paragraph accompanying the headline. Always `None` together
    /// with `news_title`.
    pub news_paragraph: Option<String>,
    /// Absolute URL of the current featured Mars image.
    pub featured_image: Option<String>,
    /// The four hemisphere entries, in listing-page document order.
    pub hemispheres: Vec<HemisphereEntry>,
    /// Text of the latest Mars weather report.
    pub weather: Option<String>,
    /// Pre-rendered HTML table of planet facts.
    pub facts: Option<String>,
    /// When this record was assembled.
    pub last_modified: DateTime<Local>,
}

/// Title and full-resolution image URL for one hemisphere.
///
/// The two fields are `None` together or `Some` together; a detail page
/// that yields only one of them counts as a failed extraction. Use
/// [`HemisphereEntry::paired`] to construct entries so that invariant
/// holds everywhere.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HemisphereEntry {
    /// Hemisphere name as shown on the detail page.
    pub title: Option<String>,
    /// URL of the full-resolution sample image.
    pub img_url: Option<String>,
}

impl HemisphereEntry {
    /// Build an entry, collapsing any partial pair to the double-`None` form.
    pub fn paired(title: Option<String>, img_url: Option<String>) -> Self {
        match (title, img_url) {
            (Some(title), Some(img_url)) => HemisphereEntry {
                title: Some(title),
                img_url: Some(img_url),
            },
            _ => HemisphereEntry::default(),
        }
    }

    /// Whether this entry extracted successfully.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.img_url.is_some()
    }
}
