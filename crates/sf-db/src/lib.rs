//! sf-db - Database abstraction layer for Schemaflow
//!
//! This crate provides the [`Database`] capability trait consumed by the
//! migration engine, plus the [`DbAdapter`] that hides table-catalog
//! differences between the supported dialects (MySQL/MariaDB and PostgreSQL).

pub mod adapter;
pub mod dialect;
pub mod error;
pub mod testing;
pub mod traits;
pub mod value;

pub use adapter::DbAdapter;
pub use dialect::Dialect;
pub use error::{DbError, DbResult};
pub use traits::Database;
pub use value::SqlValue;
