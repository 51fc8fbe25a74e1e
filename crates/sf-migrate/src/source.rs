//! Migration script sources.
//!
//! The engine reads scripts through the [`MigrationSource`] capability so the
//! orchestrator never touches the filesystem directly. The standard layout,
//! implemented by [`FsMigrationSource`], keeps one baseline file and one
//! upgrade directory per dialect under a schema root:
//!
//! ```text
//! <schema-root>/mysql.sql
//! <schema-root>/mysql-migrations/upgrade_1.sql
//! <schema-root>/pgsql.sql
//! <schema-root>/pgsql-migrations/upgrade_1.sql
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use sf_db::Dialect;

use crate::error::{MigrateError, MigrateResult};

/// Provider of versioned migration scripts and the baseline schema.
pub trait MigrationSource {
    /// File names present in the dialect's upgrade directory.
    ///
    /// A missing or unreadable directory yields an empty list rather than an
    /// error; the directory may legitimately not exist before the first
    /// upgrade script ships. Unrelated files are returned as-is and filtered
    /// by the caller.
    fn list_upgrade_scripts(&self, dialect: Dialect) -> MigrateResult<Vec<String>>;

    /// Raw script text for one version.
    ///
    /// Version `0` loads the full baseline schema; any other version loads
    /// `upgrade_<version>.sql`.
    fn load_script(&self, dialect: Dialect, version: u32) -> MigrateResult<String>;
}

/// Filesystem-backed [`MigrationSource`] over a schema root directory.
pub struct FsMigrationSource {
    schema_root: PathBuf,
}

impl FsMigrationSource {
    pub fn new(schema_root: impl Into<PathBuf>) -> Self {
        Self {
            schema_root: schema_root.into(),
        }
    }

    pub fn schema_root(&self) -> &Path {
        &self.schema_root
    }

    /// Directory holding a dialect's upgrade scripts.
    pub fn migrations_dir(&self, dialect: Dialect) -> PathBuf {
        self.schema_root.join(format!("{}-migrations", dialect.tag()))
    }

    /// Path of a dialect's full baseline schema file.
    pub fn baseline_path(&self, dialect: Dialect) -> PathBuf {
        self.schema_root.join(format!("{}.sql", dialect.tag()))
    }

    fn script_path(&self, dialect: Dialect, version: u32) -> PathBuf {
        if version == 0 {
            self.baseline_path(dialect)
        } else {
            self.migrations_dir(dialect)
                .join(format!("upgrade_{version}.sql"))
        }
    }
}

impl MigrationSource for FsMigrationSource {
    fn list_upgrade_scripts(&self, dialect: Dialect) -> MigrateResult<Vec<String>> {
        let dir = self.migrations_dir(dialect);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("no readable migrations directory at {}: {e}", dir.display());
                return Ok(Vec::new());
            }
        };

        let mut names = Vec::new();
        for entry in entries.flatten() {
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn load_script(&self, dialect: Dialect, version: u32) -> MigrateResult<String> {
        let path = self.script_path(dialect, version);
        fs::read_to_string(&path).map_err(|_| MigrateError::MissingMigrationFile {
            path: path.display().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
