// src/domain/repositories/repository.rs

use crate::domain::bookmark::{Bookmark, NewBookmark};
use crate::domain::error::DomainError;

/// Repository trait for bookmark persistence operations.
///
/// Missing rows are never errors: lookups return `None`, mutations return
/// the number of affected rows.
pub trait BookmarkRepository: std::fmt::Debug + Send + Sync {
    /// Insert a new bookmark and return the id assigned by the store
    fn add(&self, bookmark: &NewBookmark) -> Result<i64, DomainError>;

    /// Insert all bookmarks in one transaction, skipping URLs already stored.
    /// Returns how many rows were inserted.
    fn add_all(&self, bookmarks: &[NewBookmark]) -> Result<usize, DomainError>;

    /// Get a bookmark by its ID
    fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError>;

    /// Get all bookmarks, ordered by id
    fn get_all(&self) -> Result<Vec<Bookmark>, DomainError>;

    /// Overwrite name and url of an existing bookmark
    fn update(&self, id: i64, bookmark: &NewBookmark) -> Result<usize, DomainError>;

    /// Delete a bookmark by ID
    fn delete(&self, id: i64) -> Result<usize, DomainError>;

    /// Delete every bookmark
    fn delete_all(&self) -> Result<usize, DomainError>;

    fn count(&self) -> Result<usize, DomainError>;
}
