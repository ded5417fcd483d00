// src/domain/services/url_opener.rs
use crate::domain::error::DomainResult;

/// Hands a URL to whatever the OS uses to open it
pub trait UrlOpener: std::fmt::Debug + Send + Sync {
    fn open_url(&self, url: &str) -> DomainResult<()>;
}
