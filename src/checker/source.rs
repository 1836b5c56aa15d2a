// src/checker/source.rs
// =============================================================================
// This module gets the HTML we are going to grade.
//
// Two sources:
// - file mode: read the bytes from disk
// - url mode: HTTP GET and take the response body
//
// In url mode the HTTP status is NOT checked. A 404 page is still HTML, and
// it gets graded exactly like a 200 page would.
//
// Either way the bytes end up in `scraper::Html`, which we query with CSS
// selectors in evaluate.rs.
// =============================================================================

use crate::cli::{Config, Target};
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

// Loads and parses the document described by the config
//
// This is the only place the pipeline waits on I/O; everything after it
// (evaluate, report) runs once the bytes are in.
pub async fn load_document(config: &Config) -> Result<Html> {
    let raw = match &config.target {
        Target::File(path) => read_file(path).await?,
        Target::Url(url) => fetch_url(url, config.timeout).await?,
    };

    Ok(parse_document(&raw))
}

// Parses raw bytes into a queryable document
//
// Invalid UTF-8 is replaced rather than rejected; html5ever never fails on
// malformed markup, so this cannot fail either.
pub fn parse_document(raw: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(raw))
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    info!("Checking file {}", path.display());

    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

// Fetches a page and returns its body, whatever the status code
//
// Parameters:
//   url: the page to fetch, exactly as given on the command line
//   timeout: Some(duration) from --timeout, or None to wait forever
//
// Returns: the raw response body
//
// Why ignore the status?
// - A 404 or 500 page is still HTML, and people grade those too
// - So only transport failures (refused connection, DNS, timeout) are
//   errors here; they surface as "failed to fetch <url>"
//
// Example:
//   fetch_url("http://localhost:8080/missing", None) -> Ok(<the 404 page>)
async fn fetch_url(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
    info!("Checking url {}", url);

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().context("failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    debug!("HTTP {} from {}", response.status().as_u16(), url);

    let body = response
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from {}", url))?;

    Ok(body.to_vec())
}
