// src/infrastructure/http.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::title_fetcher::TitleFetcher;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Fetches the HTML `<title>` of a page with a bounded request time
#[derive(Debug, Clone)]
pub struct HttpTitleFetcher {
    timeout: Duration,
}

impl HttpTitleFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl TitleFetcher for HttpTitleFetcher {
    #[instrument(skip(self), level = "debug")]
    fn fetch_title(&self, url: &str) -> DomainResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| DomainError::CannotFetchMetadata(e.to_string()))?;

        let start = Instant::now();
        let response = client
            .get(url)
            .send()
            .map_err(|e| DomainError::CannotFetchMetadata(e.to_string()))?;
        debug!("HTTP get took {:?}", start.elapsed());

        if !response.status().is_success() {
            return Err(DomainError::CannotFetchMetadata(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| DomainError::CannotFetchMetadata(e.to_string()))?;

        extract_title(&body)
            .ok_or_else(|| DomainError::CannotFetchMetadata(format!("No title found for {}", url)))
    }
}

/// First non-empty `<title>` of an HTML document, whitespace collapsed
pub fn extract_title(html: &str) -> Option<String> {
    let document = select::document::Document::from(html);

    document
        .find(select::predicate::Name("title"))
        .next()
        .map(|n| n.text().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
}
