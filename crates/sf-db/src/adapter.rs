//! Dialect adapter over a generic database handle.
//!
//! [`DbAdapter`] bundles a [`Database`] handle with the [`Dialect`] selected
//! from its driver name and provides the fetch helpers shared by every
//! dialect. The only dialect-specific behavior is table listing.

use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::error::{DbError, DbResult};
use crate::traits::Database;
use crate::value::SqlValue;

/// A database handle paired with its selected dialect.
pub struct DbAdapter<'a> {
    db: &'a dyn Database,
    dialect: Dialect,
}

impl<'a> DbAdapter<'a> {
    /// Select the dialect from the handle's driver name.
    ///
    /// Fails with [`DbError::UnsupportedDialect`] when the driver does not
    /// belong to a known engine family.
    pub fn new(db: &'a dyn Database) -> DbResult<Self> {
        let driver = db.driver_name();
        let dialect = Dialect::from_driver_name(driver)
            .ok_or_else(|| DbError::UnsupportedDialect(driver.to_string()))?;
        log::debug!("selected {} dialect for driver {}", dialect.tag(), driver);
        Ok(Self { db, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn database(&self) -> &'a dyn Database {
        self.db
    }

    /// Fetch the first column of the first result row.
    ///
    /// Returns `Ok(None)` when the query produced zero rows, so callers
    /// pattern-match on presence instead of catching a "no result" failure.
    pub fn fetch_scalar(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<SqlValue>> {
        let rows = self.db.query(sql, params)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(first_cell(row, sql)?)),
            None => Ok(None),
        }
    }

    /// Fetch the first column across all result rows, row order preserved.
    pub fn fetch_col(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<SqlValue>> {
        self.db
            .query(sql, params)?
            .into_iter()
            .map(|row| first_cell(row, sql))
            .collect()
    }

    /// Fetch rows as a first-column to second-column mapping.
    ///
    /// Duplicate keys are last-write-wins, in row order.
    pub fn fetch_pairs(&self, sql: &str, params: &[SqlValue]) -> DbResult<HashMap<String, SqlValue>> {
        let mut pairs = HashMap::new();
        for row in self.db.query(sql, params)? {
            let mut cells = row.into_iter();
            let key = match cells.next() {
                Some(cell) => cell.to_key_string(),
                None => return Err(DbError::ResultShape(format!("empty row from {sql}"))),
            };
            let value = match cells.next() {
                Some(cell) => cell,
                None => {
                    return Err(DbError::ResultShape(format!(
                        "single-column row from {sql}, need key and value"
                    )))
                }
            };
            pairs.insert(key, value);
        }
        Ok(pairs)
    }

    /// List user base tables visible in the active schema.
    pub fn list_tables(&self) -> DbResult<Vec<String>> {
        let names = self.fetch_col(self.dialect.table_listing_sql(), &[])?;
        Ok(names.iter().map(SqlValue::to_key_string).collect())
    }
}

fn first_cell(row: Vec<SqlValue>, sql: &str) -> DbResult<SqlValue> {
    row.into_iter()
        .next()
        .ok_or_else(|| DbError::ResultShape(format!("empty row from {sql}")))
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
