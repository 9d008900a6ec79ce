//! Per-source extractors for the Mars scrape pipeline.
//!
//! This module contains one submodule per upstream source. Each targets a
//! single known page template and extracts one fragment of the final
//! record.
//!
//! # Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | News listing | [`news`] | Browser + HTML parse | First item of the article list |
//! | Featured image | [`featured_image`] | Browser, two-click chain | Full-resolution image URL |
//! | Weather feed | [`weather`] | Browser + HTML parse | Latest report tweet text |
//! | Hemispheres | [`hemispheres`] | Browser, click + back ×4 | Detail pages in listing order |
//! | Planet facts | [`facts`] | Direct HTTP fetch | No browser involved |
//!
//! # Common Contract
//!
//! Every submodule exports an async `scrape(...)` that returns its typed
//! partial result, with `None` standing in for anything it could not
//! extract. No error crosses a scrape boundary: navigation, interaction,
//! and structural-lookup failures are caught inside the module, logged,
//! and converted to the null form. The failure classes each source
//! actually catches are documented on its `scrape` function.
//!
//! Extraction itself is a pure function over a parsed [`scraper::Html`]
//! document in every module, so the parsing logic is unit-testable on
//! synthetic markup without a browser.

pub mod facts;
pub mod featured_image;
pub mod hemispheres;
pub mod news;
pub mod weather;

use scraper::ElementRef;

/// Collapse an element's text nodes into one trimmed string.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
