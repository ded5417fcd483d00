// src/application/services/bookmark_service_impl.rs
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_service::{BookmarkService, ImportSummary};
use crate::domain::bookmark::{Bookmark, NewBookmark};
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::services::title_fetcher::TitleFetcher;
use crate::domain::services::url_opener::UrlOpener;
use crate::infrastructure::export::{self, ExportFormat};
use crate::util::validation::ValidationHelper;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub struct BookmarkServiceImpl<R: BookmarkRepository> {
    repository: Arc<R>,
    title_fetcher: Arc<dyn TitleFetcher>,
    opener: Arc<dyn UrlOpener>,
}

impl<R: BookmarkRepository> BookmarkServiceImpl<R> {
    pub fn new(
        repository: Arc<R>,
        title_fetcher: Arc<dyn TitleFetcher>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self {
            repository,
            title_fetcher,
            opener,
        }
    }

    fn get_existing(&self, id: i64) -> ApplicationResult<Bookmark> {
        ValidationHelper::validate_bookmark_id(id)?;
        self.repository
            .get_by_id(id)?
            .ok_or(ApplicationError::BookmarkNotFound(id))
    }

    /// Name to store when the user gave none
    #[instrument(skip(self), level = "debug")]
    fn default_name(&self, url: &str, fetch_title: bool) -> String {
        if fetch_title && (url.starts_with("http://") || url.starts_with("https://")) {
            match self.title_fetcher.fetch_title(url) {
                Ok(title) => return title,
                Err(e) => debug!("Failed to fetch title: {}", e),
            }
        }
        ValidationHelper::host_of(url).unwrap_or_else(|| url.to_string())
    }
}

impl<R: BookmarkRepository> BookmarkService for BookmarkServiceImpl<R> {
    #[instrument(skip(self), level = "debug")]
    fn add_bookmark(
        &self,
        url: &str,
        name: Option<&str>,
        fetch_title: bool,
    ) -> ApplicationResult<Bookmark> {
        let url = url.trim();
        ValidationHelper::validate_url(url)?;

        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => self.default_name(url, fetch_title),
        };

        let new = NewBookmark::new(name.as_str(), url)?;
        let id = self.repository.add(&new)?;

        Ok(Bookmark::from_storage(id, new.name, new.url))
    }

    #[instrument(skip(self), level = "debug")]
    fn get_bookmark(&self, id: i64) -> ApplicationResult<Option<Bookmark>> {
        ValidationHelper::validate_bookmark_id(id)?;
        Ok(self.repository.get_by_id(id)?)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>> {
        Ok(self.repository.get_all()?)
    }

    #[instrument(skip(self), level = "debug")]
    fn update_bookmark(
        &self,
        id: i64,
        name: Option<&str>,
        url: Option<&str>,
    ) -> ApplicationResult<Bookmark> {
        if name.is_none() && url.is_none() {
            return Err(ApplicationError::Validation(
                "Nothing to update: give a new name and/or url".to_string(),
            ));
        }

        let mut merged = self.get_existing(id)?.to_new();
        if let Some(new_name) = name {
            merged.name = new_name.to_string();
        }
        if let Some(new_url) = url {
            ValidationHelper::validate_url(new_url)?;
            merged.url = new_url.to_string();
        }
        let changes = NewBookmark::new(merged.name.as_str(), merged.url.as_str())?;

        if self.repository.update(id, &changes)? == 0 {
            return Err(ApplicationError::BookmarkNotFound(id));
        }

        Ok(Bookmark::from_storage(id, changes.name, changes.url))
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_bookmark(&self, id: i64) -> ApplicationResult<bool> {
        ValidationHelper::validate_bookmark_id(id)?;
        Ok(self.repository.delete(id)? > 0)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_all_bookmarks(&self) -> ApplicationResult<usize> {
        Ok(self.repository.delete_all()?)
    }

    #[instrument(skip(self), level = "debug")]
    fn open_bookmark(&self, id: i64) -> ApplicationResult<Bookmark> {
        let bookmark = self.get_existing(id)?;
        self.opener.open_url(&bookmark.url)?;
        Ok(bookmark)
    }

    #[instrument(skip(self), level = "debug")]
    fn export_bookmarks(&self, path: &Path, format: ExportFormat) -> ApplicationResult<usize> {
        let bookmarks = self.repository.get_all()?;
        if bookmarks.is_empty() {
            return Err(ApplicationError::EmptyResult(
                "No bookmarks to export".to_string(),
            ));
        }

        export::export_to_file(&bookmarks, path, format)
            .map_err(|e| ApplicationError::from(e).context(format!("Export to {}", path.display())))?;

        info!("Exported {} bookmarks to {}", bookmarks.len(), path.display());
        Ok(bookmarks.len())
    }

    #[instrument(skip(self), level = "debug")]
    fn import_bookmarks(&self, path: &Path) -> ApplicationResult<ImportSummary> {
        let content = fs::read_to_string(path)?;
        let records = export::from_json(&content)?;

        // nothing is stored unless every record is valid
        let bookmarks = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                ValidationHelper::validate_url(&record.url)
                    .and_then(|_| NewBookmark::new(record.name.as_str(), record.url.as_str()))
                    .map_err(|e| {
                        ApplicationError::Validation(format!("record {}: {}", i + 1, e))
                    })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let added = self.repository.add_all(&bookmarks)?;
        let summary = ImportSummary {
            added,
            skipped: bookmarks.len() - added,
        };
        if summary.skipped > 0 {
            warn!("Skipped {} already stored URLs", summary.skipped);
        }

        Ok(summary)
    }
}
