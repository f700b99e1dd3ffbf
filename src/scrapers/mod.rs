//! Article scraping for the extraction job.
//!
//! Pages are fetched through one shared [`reqwest::Client`] built by
//! [`http_client`], then parsed by [`article::extract_article`]. Failed
//! fetches are reported as recoverable errors so the batch can skip the row.

pub mod article;

use reqwest::Client;

use crate::error::{Error, Result};

/// Many news sites refuse requests without a browser-like user agent.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; ",
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Build the HTTP client used for every page in a run.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::HttpClient)
}
