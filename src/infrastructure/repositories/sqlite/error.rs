// src/infrastructure/repositories/sqlite/error.rs

use crate::domain::error::DomainError;
use diesel::r2d2;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),

    #[error("Diesel connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    ConnectionPoolError(String),

    #[error("Schema setup failed: {0}")]
    SchemaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL already exists: {0}")]
    DuplicateUrl(String),
}

pub type SqliteResult<T> = Result<T, SqliteRepositoryError>;

impl SqliteRepositoryError {
    /// Attach the offending URL to unique-constraint violations, pass everything else through
    pub fn with_url(err: DieselError, url: &str) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                SqliteRepositoryError::DuplicateUrl(url.to_string())
            }
            other => SqliteRepositoryError::DatabaseError(other),
        }
    }
}

impl From<r2d2::Error> for SqliteRepositoryError {
    fn from(err: r2d2::Error) -> Self {
        SqliteRepositoryError::ConnectionPoolError(err.to_string())
    }
}

impl From<SqliteRepositoryError> for DomainError {
    fn from(err: SqliteRepositoryError) -> Self {
        match err {
            SqliteRepositoryError::DuplicateUrl(url) => DomainError::DuplicateUrl(url),
            SqliteRepositoryError::DatabaseError(diesel_err) => match diesel_err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                    DomainError::DuplicateUrl(info.message().to_string())
                }
                DieselError::DatabaseError(_, info) => {
                    DomainError::Storage(format!("Database error: {}", info.message()))
                }
                _ => DomainError::Storage(format!("Database error: {}", diesel_err)),
            },
            SqliteRepositoryError::ConnectionError(e) => {
                DomainError::Connection(format!("Database connection error: {}", e))
            }
            SqliteRepositoryError::ConnectionPoolError(e) => {
                DomainError::Connection(format!("Connection pool error: {}", e))
            }
            SqliteRepositoryError::SchemaError(e) => DomainError::Connection(e),
            SqliteRepositoryError::IoError(e) => {
                DomainError::Connection(format!("IO error: {}", e))
            }
        }
    }
}
