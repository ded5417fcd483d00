// src/infrastructure/repositories/sqlite/schema.rs

diesel::table! {
    bookmarks (id) {
        id -> BigInt,
        name -> Text,
        url -> Text,
    }
}

/// Canonical schema of the store. `AUTOINCREMENT` keeps ids from being reused
/// after deletions, including `DELETE FROM bookmarks`.
pub const CREATE_BOOKMARKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS bookmarks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        url TEXT NOT NULL UNIQUE
    );
";
