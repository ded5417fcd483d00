// src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted bookmark.
///
/// `id` is assigned by the store and never serialized: exported files carry
/// only `name` and `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl Bookmark {
    /// Rebuild a bookmark from a stored row
    pub fn from_storage(id: i64, name: String, url: String) -> Self {
        Self { id, name, url }
    }

    /// The unsaved part of the bookmark, e.g. for writing it back after edits
    pub fn to_new(&self) -> NewBookmark {
        NewBookmark {
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {}", self.id, self.name, self.url)
    }
}

/// A `(name, url)` pair which has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub name: String,
    pub url: String,
}

impl NewBookmark {
    /// Both fields must be non-empty after trimming
    pub fn new<S: AsRef<str>>(name: S, url: S) -> DomainResult<Self> {
        let name = name.as_ref().trim();
        let url = url.as_ref().trim();

        if url.is_empty() {
            return Err(DomainError::InvalidUrl("URL must not be empty".to_string()));
        }
        if name.is_empty() {
            return Err(DomainError::Other(format!(
                "Bookmark name must not be empty (url: {})",
                url
            )));
        }

        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}
