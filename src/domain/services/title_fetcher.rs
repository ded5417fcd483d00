// src/domain/services/title_fetcher.rs
use crate::domain::error::DomainResult;

/// Looks up a human readable title for a URL, typically the HTML `<title>`
pub trait TitleFetcher: std::fmt::Debug + Send + Sync {
    fn fetch_title(&self, url: &str) -> DomainResult<String>;
}
