// src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;
use crate::infrastructure::export::ExportFormat;
use std::fmt::Debug;
use std::path::Path;

/// Outcome of importing a bookmark file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    /// Entries whose URL was already stored
    pub skipped: usize,
}

/// Service interface for bookmark-related operations
pub trait BookmarkService: Send + Sync + Debug {
    /// Add a new bookmark.
    ///
    /// Without a `name` the page title is used when `fetch_title` is set and
    /// the URL is reachable, otherwise the URL host.
    fn add_bookmark(
        &self,
        url: &str,
        name: Option<&str>,
        fetch_title: bool,
    ) -> ApplicationResult<Bookmark>;

    /// Get a bookmark by ID
    fn get_bookmark(&self, id: i64) -> ApplicationResult<Option<Bookmark>>;

    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>>;

    /// Replace name and/or url of a bookmark, keeping its id
    fn update_bookmark(
        &self,
        id: i64,
        name: Option<&str>,
        url: Option<&str>,
    ) -> ApplicationResult<Bookmark>;

    /// Delete a bookmark by ID, false if there was none
    fn delete_bookmark(&self, id: i64) -> ApplicationResult<bool>;

    /// Delete all bookmarks, returns how many were removed
    fn delete_all_bookmarks(&self) -> ApplicationResult<usize>;

    /// Open a bookmark in the default browser
    fn open_bookmark(&self, id: i64) -> ApplicationResult<Bookmark>;

    /// Write all bookmarks to `path`; fails with `EmptyResult` when there are none
    fn export_bookmarks(&self, path: &Path, format: ExportFormat) -> ApplicationResult<usize>;

    /// Add all bookmarks from a JSON export file, skipping known URLs
    fn import_bookmarks(&self, path: &Path) -> ApplicationResult<ImportSummary>;
}
