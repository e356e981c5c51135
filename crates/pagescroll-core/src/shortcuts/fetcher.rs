use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use super::tree::{read_document, ShortcutTree};
use crate::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_DOCUMENT_BYTES: u64 = 512 * 1024;

/// Loads the shortcuts document with a single GET, no retries
pub struct ShortcutsFetcher {
    client: Client,
}

impl ShortcutsFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch and parse the document at `url`
    pub async fn fetch(&self, url: &str) -> Result<ShortcutTree> {
        let url = Url::parse(url)?;
        tracing::info!("Fetching shortcuts from: {}", url);

        let mut response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        if let Some(declared) = response.content_length() {
            ensure_document_size(declared, &url)?;
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            ensure_document_size((body.len() + chunk.len()) as u64, &url)?;
            body.extend_from_slice(&chunk);
        }

        let value = read_document(&body)?;
        let tree = ShortcutTree::from_value(&value)?;
        tracing::debug!(links = tree.link_count(), "Shortcuts loaded");
        Ok(tree)
    }

    /// Fetch the document, logging and discarding any failure
    pub async fn fetch_best_effort(&self, url: &str) -> Option<ShortcutTree> {
        match self.fetch(url).await {
            Ok(tree) => Some(tree),
            Err(e) => {
                tracing::warn!(url, error = %e, "Shortcuts unavailable");
                None
            }
        }
    }
}

fn ensure_document_size(size: u64, url: &Url) -> Result<()> {
    if size > MAX_DOCUMENT_BYTES {
        return Err(Error::Shortcuts(format!(
            "Shortcuts document too large ({} bytes, limit {}) at {}",
            size, MAX_DOCUMENT_BYTES, url
        )));
    }
    Ok(())
}
