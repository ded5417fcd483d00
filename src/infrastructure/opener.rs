// src/infrastructure/opener.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::url_opener::UrlOpener;
use tracing::{debug, instrument};

/// Opens URLs with the OS default handler (xdg-open, open, start)
#[derive(Debug, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }
}

impl UrlOpener for SystemUrlOpener {
    #[instrument(skip(self), level = "debug")]
    fn open_url(&self, url: &str) -> DomainResult<()> {
        let target = with_scheme(url);
        debug!("Opening URL with default OS command: {}", target);
        open::that(&target).map_err(|e| DomainError::Other(format!("Failed to open URL: {}", e)))
    }
}

/// Bare hosts like `google.com` are stored as typed; browsers need a scheme
pub fn with_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
