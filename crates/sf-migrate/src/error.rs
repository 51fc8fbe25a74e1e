//! Error types for sf-migrate

use sf_db::DbError;
use thiserror::Error;

/// Migration engine errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Underlying database capability error (M001)
    #[error("[M001] Database error: {0}")]
    Db(#[from] DbError),

    /// A script resolved to zero executable statements (M002)
    #[error("[M002] Migration {version} has no statements")]
    EmptyMigration { version: u32 },

    /// A statement failed while a migration was being applied (M003)
    #[error("[M003] Migration {version} failed ({message}) while running {statement}")]
    ApplyFailed {
        version: u32,
        message: String,
        statement: String,
    },

    /// A referenced script file could not be loaded (M004)
    #[error("[M004] Failed to load migration file {path}")]
    MissingMigrationFile { path: String },
}

/// Result type alias for [`MigrateError`]
pub type MigrateResult<T> = Result<T, MigrateError>;
