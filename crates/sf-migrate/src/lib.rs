//! sf-migrate - Schema migration engine for Schemaflow
//!
//! Tracks the applied schema version of a named component, discovers pending
//! upgrade scripts through a [`MigrationSource`], and applies them in
//! ascending version order against a [`sf_db::Database`] handle, stopping at
//! the first failure.

pub mod error;
pub mod migration;
pub mod runner;
pub mod source;

pub use error::{MigrateError, MigrateResult};
pub use migration::Migration;
pub use runner::{Migrations, SchemaState, DEFAULT_TABLE_NAME};
pub use source::{FsMigrationSource, MigrationSource};
