use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::BookmarkServiceImpl;
use crate::config::Settings;
use crate::domain::services::title_fetcher::TitleFetcher;
use crate::domain::services::url_opener::UrlOpener;
use crate::infrastructure::http::HttpTitleFetcher;
use crate::infrastructure::opener::SystemUrlOpener;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub bookmark_service: Arc<dyn BookmarkService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    #[instrument(skip_all, level = "debug")]
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        let bookmark_repository = Self::create_repository(&config.db_url)?;
        let title_fetcher: Arc<dyn TitleFetcher> = Arc::new(HttpTitleFetcher::new(
            Duration::from_secs(config.fetch_timeout_secs),
        ));
        let opener: Arc<dyn UrlOpener> = Arc::new(SystemUrlOpener::new());

        let bookmark_service = Arc::new(BookmarkServiceImpl::new(
            bookmark_repository,
            title_fetcher,
            opener,
        ));

        Ok(Self { bookmark_service })
    }

    /// Opens the store, creating file and schema on first use
    fn create_repository(db_url: &str) -> ApplicationResult<Arc<SqliteBookmarkRepository>> {
        debug!("Using database at {}", db_url);
        let repository = SqliteBookmarkRepository::from_url(db_url)
            .map_err(|e| ApplicationError::Domain(e.into()))?;
        Ok(Arc::new(repository))
    }
}
