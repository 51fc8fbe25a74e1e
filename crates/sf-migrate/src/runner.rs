//! Migration-set orchestration for one component.
//!
//! [`Migrations`] determines the last applied version from the tracking
//! table, discovers candidate versions through the [`MigrationSource`],
//! computes the pending subset, and applies it in ascending order.

use sf_db::{Database, DbAdapter, Dialect, SqlValue};

use crate::error::MigrateResult;
use crate::migration::Migration;
use crate::source::MigrationSource;

/// Default name of the shared migration-tracking table.
pub const DEFAULT_TABLE_NAME: &str = "schema_migration";

/// What the tracking table says about a component's schema.
///
/// A fresh database has no tracking table, no rows, or a NULL maximum; all of
/// those mean the same thing and get a distinct variant instead of a magic
/// version number, so nothing downstream does arithmetic on a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// Nothing recorded; the full baseline schema must be applied.
    Uninitialized,
    /// Migrations up to and including this version have been recorded.
    AtVersion(u32),
}

/// Migration engine for one component's schema.
///
/// Multiple components share one database and one tracking table; the
/// component name partitions the recorded versions.
pub struct Migrations<'a> {
    adapter: DbAdapter<'a>,
    source: &'a dyn MigrationSource,
    component: String,
    table_name: String,
}

impl<'a> Migrations<'a> {
    /// Build an engine over an open handle and a script source.
    ///
    /// Dialect selection happens here and fails for unsupported drivers.
    pub fn new(
        db: &'a dyn Database,
        source: &'a dyn MigrationSource,
        component: impl Into<String>,
    ) -> MigrateResult<Self> {
        let adapter = DbAdapter::new(db)?;
        Ok(Self {
            adapter,
            source,
            component: component.into(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
        })
    }

    /// Override the tracking-table name.
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.adapter.dialect()
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Read the component's last applied version from the tracking table.
    ///
    /// Absent rows, a NULL maximum, and read failures (for example the
    /// tracking table not existing yet on a fresh database) all normalize to
    /// [`SchemaState::Uninitialized`]. This is the only place that
    /// normalization happens; every later error propagates.
    pub fn last_applied_version(&self) -> SchemaState {
        let sql = format!(
            "SELECT MAX(schema_version) AS schema_version FROM {} WHERE component_name = ?",
            self.table_name
        );
        let params = [SqlValue::Text(self.component.clone())];
        match self.adapter.fetch_scalar(&sql, &params) {
            Ok(Some(value)) => match value.as_i64() {
                Some(v) if v > 0 => SchemaState::AtVersion(v as u32),
                _ => SchemaState::Uninitialized,
            },
            Ok(None) => SchemaState::Uninitialized,
            Err(e) => {
                log::debug!(
                    "component {}: treating schema as uninitialized, version query failed: {e}",
                    self.component
                );
                SchemaState::Uninitialized
            }
        }
    }

    pub fn has_any_table(&self) -> MigrateResult<bool> {
        Ok(!self.adapter.list_tables()?.is_empty())
    }

    pub fn has_table(&self, table_name: &str) -> MigrateResult<bool> {
        Ok(self.adapter.list_tables()?.iter().any(|t| t == table_name))
    }

    pub fn has_migrations_table(&self) -> MigrateResult<bool> {
        self.has_table(&self.table_name)
    }

    /// True once at least the baseline has been applied.
    pub fn has_schema(&self) -> MigrateResult<bool> {
        Ok(self.list_pending_versions()? != [0])
    }

    /// All versions available from the source, ascending.
    ///
    /// Entries not matching `upgrade_<n>.sql` are skipped; upgrade
    /// directories may contain unrelated files.
    pub fn list_available_versions(&self) -> MigrateResult<Vec<u32>> {
        let mut versions: Vec<u32> = self
            .source
            .list_upgrade_scripts(self.dialect())?
            .iter()
            .filter_map(|name| parse_upgrade_version(name))
            .collect();
        versions.sort_unstable();
        Ok(versions)
    }

    /// Versions that must run, ascending.
    ///
    /// An uninitialized schema pends exactly `[0]`, the baseline. Otherwise
    /// every available version above the last applied one pends; gaps in the
    /// available set are preserved, not filled.
    pub fn list_pending_versions(&self) -> MigrateResult<Vec<u32>> {
        match self.last_applied_version() {
            SchemaState::Uninitialized => Ok(vec![0]),
            SchemaState::AtVersion(last) => Ok(self
                .list_available_versions()?
                .into_iter()
                .filter(|v| *v > last)
                .collect()),
        }
    }

    pub fn count_pending_migrations(&self) -> MigrateResult<usize> {
        Ok(self.list_pending_versions()?.len())
    }

    pub fn has_pending_migrations(&self) -> MigrateResult<bool> {
        Ok(self.count_pending_migrations()? > 0)
    }

    /// Materialize every pending version with its script text.
    ///
    /// Fails before anything is applied if a script cannot be loaded.
    pub fn pending_migrations(&self) -> MigrateResult<Vec<Migration>> {
        let mut migrations = Vec::new();
        for version in self.list_pending_versions()? {
            let sql = self.source.load_script(self.dialect(), version)?;
            migrations.push(Migration::new(version, sql));
        }
        Ok(migrations)
    }

    /// Apply every pending migration in ascending version order.
    ///
    /// Stops and propagates on the first failure. Progress is NOT recorded
    /// here: after each migration succeeds, the caller MUST invoke
    /// [`Migrations::record_applied`] with that version, or the next run will
    /// reapply everything from the same starting point.
    pub fn apply_pending_migrations(&self) -> MigrateResult<()> {
        for migration in self.pending_migrations()? {
            migration.apply(self.adapter.database())?;
            log::info!(
                "component {}: migration {} applied",
                self.component,
                migration.version()
            );
        }
        Ok(())
    }

    /// Record one successfully applied version in the tracking table.
    pub fn record_applied(&self, version: u32) -> MigrateResult<()> {
        let sql = format!(
            "INSERT INTO {} (schema_version, component_name, migration_time) \
             VALUES (?, ?, CURRENT_TIMESTAMP)",
            self.table_name
        );
        let params = [
            SqlValue::Int(i64::from(version)),
            SqlValue::Text(self.component.clone()),
        ];
        self.adapter.database().execute(&sql, &params)?;
        Ok(())
    }

    /// Create the tracking table if it does not exist.
    ///
    /// Bootstrap helper for operational tooling; the engine itself never
    /// calls it.
    pub fn ensure_tracking_table(&self) -> MigrateResult<()> {
        self.adapter
            .database()
            .execute(&self.tracking_table_ddl(), &[])?;
        Ok(())
    }

    /// Dialect-specific DDL for the tracking table.
    pub fn tracking_table_ddl(&self) -> String {
        match self.dialect() {
            Dialect::Mysql => format!(
                "CREATE TABLE IF NOT EXISTS {} (
                     schema_version INT UNSIGNED NOT NULL,
                     component_name VARCHAR(64) NOT NULL,
                     migration_time DATETIME NOT NULL,
                     PRIMARY KEY (component_name, schema_version)
                 ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4",
                self.table_name
            ),
            Dialect::Pgsql => format!(
                "CREATE TABLE IF NOT EXISTS {} (
                     schema_version INTEGER NOT NULL,
                     component_name VARCHAR(64) NOT NULL,
                     migration_time TIMESTAMP WITH TIME ZONE NOT NULL,
                     PRIMARY KEY (component_name, schema_version)
                 )",
                self.table_name
            ),
        }
    }
}

/// Parse the version out of an `upgrade_<n>.sql` file name.
fn parse_upgrade_version(filename: &str) -> Option<u32> {
    let digits = filename.strip_prefix("upgrade_")?.strip_suffix(".sql")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
