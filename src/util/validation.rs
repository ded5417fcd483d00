// src/util/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::error::{DomainError, DomainResult};
use regex::Regex;
use std::sync::OnceLock;

/// Host-with-TLD shape, optionally with scheme, `www.` and a path/query tail
const URL_PATTERN: &str =
    r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z]{2,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$";

fn url_regex() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

/// Utility for common validation patterns across services
pub struct ValidationHelper;

impl ValidationHelper {
    /// Validates that a bookmark ID is positive (> 0)
    pub fn validate_bookmark_id(id: i64) -> ApplicationResult<()> {
        if id <= 0 {
            return Err(ApplicationError::Validation(format!(
                "Invalid bookmark ID: {}",
                id
            )));
        }
        Ok(())
    }

    /// Checks that `url` is a well-formed address.
    ///
    /// Accepts bare hosts (`google.com`), http(s) URLs matching the host
    /// pattern, and anything else `url::Url` parses with a host
    /// (e.g. `http://localhost:8080`).
    pub fn validate_url(url: &str) -> DomainResult<()> {
        let url = url.trim();
        if url_regex().is_match(url) {
            return Ok(());
        }

        match url::Url::parse(url) {
            Ok(parsed) if parsed.has_host() => Ok(()),
            _ => Err(DomainError::InvalidUrl(format!("invalid url format: {}", url))),
        }
    }

    /// Host part of `url`, tolerating a missing scheme
    pub fn host_of(url: &str) -> Option<String> {
        let url = url.trim();
        let parsed = url::Url::parse(url)
            .ok()
            .filter(|u| u.has_host())
            .or_else(|| url::Url::parse(&format!("http://{}", url)).ok())?;

        parsed
            .host_str()
            .map(|h| h.trim_start_matches("www.").to_string())
            .filter(|h| !h.is_empty())
    }
}
