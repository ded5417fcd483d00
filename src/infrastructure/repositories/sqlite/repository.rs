// src/infrastructure/repositories/sqlite/repository.rs

use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::{debug, info, instrument};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::bookmark::{Bookmark, NewBookmark};
use crate::domain::error::DomainError;
use crate::domain::repositories::repository::BookmarkRepository;
use crate::infrastructure::repositories::sqlite::model::{DbBookmark, DbBookmarkChanges};
use crate::infrastructure::repositories::sqlite::schema::bookmarks::dsl;

#[derive(Clone, Debug)]
pub struct SqliteBookmarkRepository {
    pool: ConnectionPool,
}

impl SqliteBookmarkRepository {
    /// Open (or create) the store at `database_url`
    #[instrument(skip_all, level = "debug")]
    pub fn from_url(database_url: &str) -> SqliteResult<Self> {
        let pool = super::connection::init_pool(database_url)?;
        Ok(Self { pool })
    }

    /// Get a connection from the pool
    #[instrument(skip_all, level = "trace")]
    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    #[instrument(skip_all, level = "debug", fields(url = %bookmark.url))]
    fn add(&self, bookmark: &NewBookmark) -> Result<i64, DomainError> {
        let mut conn = self.get_connection()?;
        let row = DbBookmarkChanges::from(bookmark);

        // insert and rowid lookup must run on the same connection
        let id = conn
            .transaction::<i64, diesel::result::Error, _>(|conn| {
                diesel::insert_into(dsl::bookmarks)
                    .values(&row)
                    .execute(conn)?;

                diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()"))
                    .get_result::<i64>(conn)
            })
            .map_err(|e| SqliteRepositoryError::with_url(e, &bookmark.url))?;

        info!("bookmark {} added successfully", id);
        Ok(id)
    }

    #[instrument(skip_all, level = "debug", fields(n = bookmarks.len()))]
    fn add_all(&self, bookmarks: &[NewBookmark]) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let inserted = conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                let mut inserted = 0;
                for bookmark in bookmarks {
                    let n = diesel::insert_or_ignore_into(dsl::bookmarks)
                        .values(DbBookmarkChanges::from(bookmark))
                        .execute(conn)?;
                    if n == 0 {
                        debug!("Skipping already stored URL: {}", bookmark.url);
                    }
                    inserted += n;
                }
                Ok(inserted)
            })
            .map_err(SqliteRepositoryError::DatabaseError)?;

        info!("{} of {} bookmarks added", inserted, bookmarks.len());
        Ok(inserted)
    }

    #[instrument(skip_all, level = "debug")]
    fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = dsl::bookmarks
            .filter(dsl::id.eq(id))
            .select(DbBookmark::as_select())
            .first::<DbBookmark>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result.map(Bookmark::from))
    }

    #[instrument(skip_all, level = "debug")]
    fn get_all(&self) -> Result<Vec<Bookmark>, DomainError> {
        let mut conn = self.get_connection()?;

        let db_bookmarks = dsl::bookmarks
            .order(dsl::id.asc())
            .select(DbBookmark::as_select())
            .load::<DbBookmark>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        debug!("Loaded {} bookmarks", db_bookmarks.len());
        Ok(db_bookmarks.into_iter().map(Bookmark::from).collect())
    }

    #[instrument(skip_all, level = "debug", fields(id = id))]
    fn update(&self, id: i64, bookmark: &NewBookmark) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;
        let changes = DbBookmarkChanges::from(bookmark);

        let affected = diesel::update(dsl::bookmarks.filter(dsl::id.eq(id)))
            .set(&changes)
            .execute(&mut conn)
            .map_err(|e| SqliteRepositoryError::with_url(e, &bookmark.url))?;

        if affected > 0 {
            info!("bookmark {} updated successfully", id);
        } else {
            debug!("No bookmark with id {} to update", id);
        }
        Ok(affected)
    }

    #[instrument(skip_all, level = "debug", fields(id = id))]
    fn delete(&self, id: i64) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let affected = diesel::delete(dsl::bookmarks.filter(dsl::id.eq(id)))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        debug!("Deleted {} row(s) for id {}", affected, id);
        Ok(affected)
    }

    #[instrument(skip_all, level = "debug")]
    fn delete_all(&self) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let affected = diesel::delete(dsl::bookmarks)
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        info!("Deleted all {} bookmarks", affected);
        Ok(affected)
    }

    #[instrument(skip_all, level = "trace")]
    fn count(&self) -> Result<usize, DomainError> {
        let mut conn = self.get_connection()?;

        let n = dsl::bookmarks
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(n as usize)
    }
}
