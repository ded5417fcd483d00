// src/infrastructure/repositories/sqlite/model.rs
use crate::domain::bookmark::{Bookmark, NewBookmark};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbBookmark {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl From<DbBookmark> for Bookmark {
    fn from(row: DbBookmark) -> Self {
        Bookmark::from_storage(row.id, row.name, row.url)
    }
}

/// Row for insertion and for full updates; the id is owned by the store
#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
pub struct DbBookmarkChanges<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a NewBookmark> for DbBookmarkChanges<'a> {
    fn from(bookmark: &'a NewBookmark) -> Self {
        Self {
            name: &bookmark.name,
            url: &bookmark.url,
        }
    }
}
