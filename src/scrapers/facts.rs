//! Planet facts extractor.
//!
//! The facts page is a static document, so this source skips the browser
//! entirely and fetches it with a plain HTTP client. The first table on
//! the page is re-rendered as two-column markup with `description` as the
//! row index, ready for a presentation layer to embed as-is.
//!
//! This is the most permissive extractor in the pipeline: any failure
//! class (connect error, timeout, no table, malformed rows) yields
//! `None`. There is nothing on this page worth failing a run over.

use std::error::Error;
use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

use crate::session::ScrapeConfig;
use crate::utils::truncate_for_log;

const FACTS_URL: &str = "https://space-facts.com/mars/";
const TABLE_CLASSES: &str = "table table-striped table-dark";

/// Fetch the facts page and render its first table.
#[instrument(level = "info", skip_all)]
pub async fn scrape(config: &ScrapeConfig) -> Option<String> {
    match fetch_table(FACTS_URL, config.fetch_timeout).await {
        Ok(Some(markup)) => {
            info!(bytes = markup.len(), "rendered facts table");
            tracing::debug!(preview = %truncate_for_log(&markup, 300), "facts markup");
            Some(markup)
        }
        Ok(None) => {
            warn!(url = FACTS_URL, "facts page carried no usable table");
            None
        }
        Err(e) => {
            warn!(error = %e, url = FACTS_URL, "facts fetch failed; leaving field empty");
            None
        }
    }
}

async fn fetch_table(url: &str, timeout: Duration) -> Result<Option<String>, Box<dyn Error>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let body = client.get(url).send().await?.text().await?;
    let document = Html::parse_document(&body);
    Ok(render_facts_table(&document))
}

/// Render the document's first table as description/value markup.
///
/// Rows with fewer than two cells are skipped; a table that yields no
/// rows at all renders as `None`.
fn render_facts_table(document: &Html) -> Option<String> {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td, th").unwrap();

    let table = document.select(&table_selector).next()?;
    let mut rows = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<String> = row.select(&cell_selector).map(super::element_text).collect();
        if cells.len() >= 2 {
            rows.push((cells[0].clone(), cells[1].clone()));
        }
    }
    if rows.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&format!(
        "<table border=\"1\" class=\"dataframe {TABLE_CLASSES}\">\n"
    ));
    out.push_str("  <thead>\n");
    out.push_str("    <tr style=\"text-align: right;\">\n      <th></th>\n      <th>value</th>\n    </tr>\n");
    out.push_str("    <tr>\n      <th>description</th>\n      <th></th>\n    </tr>\n");
    out.push_str("  </thead>\n  <tbody>\n");
    for (description, value) in &rows {
        out.push_str(&format!(
            "    <tr>\n      <th>{}</th>\n      <td>{}</td>\n    </tr>\n",
            escape(description),
            escape(value)
        ));
    }
    out.push_str("  </tbody>\n</table>");
    Some(out)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_first_table_as_description_value() {
        let html = Html::parse_document(
            r#"
            <table id="tablepress-p-mars">
              <tbody>
                <tr><td>Equatorial Diameter:</td><td>6,792 km</td></tr>
                <tr><td>Mass:</td><td>6.39 × 10^23 kg</td></tr>
              </tbody>
            </table>
            <table><tr><td>Second</td><td>table ignored</td></tr></table>
            "#,
        );

        let markup = render_facts_table(&html).unwrap();
        assert!(markup.contains("class=\"dataframe table table-striped table-dark\""));
        assert!(markup.contains("<th>description</th>"));
        assert!(markup.contains("<th>Equatorial Diameter:</th>"));
        assert!(markup.contains("<td>6,792 km</td>"));
        assert!(!markup.contains("table ignored"));
    }

    #[test]
    fn test_no_table_yields_none() {
        let html = Html::parse_document("<p>facts are elsewhere today</p>");
        assert_eq!(render_facts_table(&html), None);
    }

    #[test]
    fn test_table_without_two_cell_rows_yields_none() {
        let html = Html::parse_document("<table><tr><td>lonely cell</td></tr></table>");
        assert_eq!(render_facts_table(&html), None);
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let html = Html::parse_document(
            "<table><tr><td>Temp &lt;avg&gt;</td><td>-60 &amp; falling</td></tr></table>",
        );

        let markup = render_facts_table(&html).unwrap();
        assert!(markup.contains("<th>Temp &lt;avg&gt;</th>"));
        assert!(markup.contains("<td>-60 &amp; falling</td>"));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_an_error_not_a_panic() {
        // Port 9 (discard) refuses connections on loopback.
        let result = fetch_table("http://127.0.0.1:9/", Duration::from_secs(1)).await;
        assert!(result.is_err());
    }
}
