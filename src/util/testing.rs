// src/util/testing.rs

use std::env;
use std::sync::OnceLock;
use tempfile::TempDir;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::DB_URL_ENV;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;

/// File name of the store inside the directory returned by [`setup_test_db`]
pub const TEST_DB_FILE: &str = "bookmarks.db";

static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes the global test environment (logging) exactly once.
pub fn init_test_env() {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let noisy_modules = ["html5ever", "reqwest", "mio", "want", "hyper_util"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Restores `BOOKMARKER_DB_URL` to its previous value on drop
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_url: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_url: env::var(DB_URL_ENV).ok(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        env::remove_var(DB_URL_ENV);
        if let Some(val) = &self.db_url {
            env::set_var(DB_URL_ENV, val);
        }
    }
}

/// Creates a fresh store in its own temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the repository is used.
pub fn setup_test_db() -> (TempDir, SqliteBookmarkRepository) {
    init_test_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(TEST_DB_FILE);
    let repository = SqliteBookmarkRepository::from_url(path.to_string_lossy().as_ref())
        .expect("Failed to create SqliteBookmarkRepository");
    (dir, repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::repository::BookmarkRepository;
    use serial_test::serial;

    #[test]
    fn test_setup_test_db() {
        let (dir, repo) = setup_test_db();
        assert!(repo.get_connection().is_ok());
        assert!(dir.path().join(TEST_DB_FILE).exists());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    #[serial]
    fn given_env_var_changed_when_guard_dropped_then_restored() {
        env::set_var(DB_URL_ENV, "/original.db");
        {
            let _guard = EnvGuard::new();
            env::set_var(DB_URL_ENV, "/changed.db");
        }
        assert_eq!(env::var(DB_URL_ENV).unwrap(), "/original.db");
        env::remove_var(DB_URL_ENV);
    }
}
