//! Error taxonomy for the scrape pipeline.
//!
//! Only one class of failure is fatal to a run: the browser engine failing
//! to start. Everything downstream of a started session (navigation,
//! clicks, missing markup) is caught at the extractor boundaries and
//! degrades the affected field(s) to `None` instead of surfacing here.

use chromiumoxide::error::CdpError;
use thiserror::Error;

/// Errors raised by the session and navigation layers.
///
/// `SessionStart` is the only variant that ever reaches the caller of
/// [`scrape_all`](crate::aggregator::scrape_all); the rest exist so
/// extractors have a typed value to log before nulling their field.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The headless browser engine could not be launched.
    #[error("could not launch browser engine: {0}")]
    SessionStart(String),

    /// Driving the session to a URL failed outright.
    #[error("navigation to {url} failed")]
    Navigation {
        url: String,
        #[source]
        source: CdpError,
    },

    /// An element the interaction flow depends on never appeared.
    #[error("expected element {selector:?} did not appear")]
    MissingElement { selector: String },

    /// Any other browser protocol failure (clicks, content reads, evals).
    #[error("browser interaction failed")]
    Browser(#[from] CdpError),
}
