//! Error types for sf-db

use thiserror::Error;

/// Database capability errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Unknown driver at dialect selection time (D001)
    #[error("[D001] Migrations are supported for MySQL/MariaDB and PostgreSQL only, got {0}")]
    UnsupportedDialect(String),

    /// Statement execution failed (D002)
    #[error("[D002] SQL execution failed: {0}")]
    Execution(String),

    /// A result row did not have the columns a fetch helper needs (D003)
    #[error("[D003] Unexpected result shape: {0}")]
    ResultShape(String),
}

/// Result type alias for [`DbError`]
pub type DbResult<T> = Result<T, DbError>;
