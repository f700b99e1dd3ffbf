//! Generic article page scraper.
//!
//! The title is the text of the first `<h1>` on the page and the body is the
//! text of every `<p>` joined with a single space. Pages without an `<h1>`
//! or without any paragraph text are rejected.

use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::models::ExtractedArticle;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid selector"));

/// Fetch `url` and extract its title and body.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article(client: &Client, url: &str) -> Result<ExtractedArticle> {
    let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    let html = client
        .get(parsed)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch_err)?
        .text()
        .await
        .map_err(fetch_err)?;
    debug!(bytes = html.len(), "Downloaded article page");

    let article = extract_article(url, &html)?;
    info!(
        title_chars = article.title.chars().count(),
        body_bytes = article.body.len(),
        "Parsed article"
    );
    Ok(article)
}

/// Extract the title and body from an HTML document.
pub fn extract_article(url: &str, html: &str) -> Result<ExtractedArticle> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .ok_or_else(|| Error::Extraction {
            url: url.to_string(),
            what: "<h1> title",
        })?;

    let body = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .join(" ");
    if body.is_empty() {
        return Err(Error::Extraction {
            url: url.to_string(),
            what: "paragraph text",
        });
    }

    Ok(ExtractedArticle { title, body })
}
