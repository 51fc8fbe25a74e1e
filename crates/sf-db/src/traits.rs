//! Database capability trait definition

use crate::error::DbResult;
use crate::value::SqlValue;

/// Database abstraction consumed by the migration engine.
///
/// Implementations wrap an already-open connection. Connection setup, pooling
/// and transaction management stay with the host: the handle is an externally
/// owned resource used exclusively for the duration of a migration run, and
/// every call blocks the calling thread until the driver answers.
pub trait Database {
    /// Prepare and execute a statement, returning the affected-row count.
    ///
    /// Placeholders use positional `?` markers; implementations translate to
    /// their driver's syntax where it differs.
    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Prepare and execute a read query, returning all result rows.
    fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Vec<SqlValue>>>;

    /// Execute a statement on the unprepared path.
    ///
    /// Admin commands such as `OPTIMIZE` cannot go through a prepared
    /// statement on every driver, so the engine routes them here.
    fn execute_direct(&self, sql: &str) -> DbResult<usize>;

    /// The underlying driver identifier, used for dialect selection.
    fn driver_name(&self) -> &str;
}
