//! # Mars Scrape
//!
//! A multi-source scrape pipeline that collects a fixed set of data points
//! about the planet Mars (latest news headline and teaser, the current
//! featured image URL, a weather report, four hemisphere image entries,
//! and a facts table) and composes them into one [`ScrapeRecord`].
//!
//! ## Architecture
//!
//! One scrape run is fully sequential over a single shared browser session:
//!
//! 1. **Session** ([`session`]): launches headless Chromium and owns it for
//!    the run, including the explicit navigation history
//! 2. **Navigator** ([`navigator`]): moves the session between URLs with
//!    bounded readiness waits and re-parses the page after every move
//! 3. **Extractors** ([`scrapers`]): one module per source, each converting
//!    its own failures to null fields instead of erroring
//! 4. **Aggregator** ([`aggregator`]): composes the partial results into a
//!    timestamped record and guarantees the session is released
//!
//! ## Failure Model
//!
//! Upstream markup drift degrades individual fields to `null`; only a
//! browser that refuses to start fails a run. The record's shape never
//! varies: every key is present on every run.

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod models;
pub mod navigator;
pub mod outputs;
pub mod scrapers;
pub mod session;
pub mod utils;

pub use aggregator::scrape_all;
pub use error::ScrapeError;
pub use models::{HemisphereEntry, ScrapeRecord};
pub use session::{ScrapeConfig, Session};
