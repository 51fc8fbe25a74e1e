//! A single versioned migration script and how it is applied.
//!
//! Statement extraction is deliberately a textual transform, not a SQL
//! parser: line comments are cut from the first `-- ` marker, and statements
//! are split on a semicolon followed by whitespace. Existing script
//! collections depend on exactly these heuristics, so a string literal
//! containing `-- ` or `; ` will be mangled. That is a documented limitation
//! of the format, and scripts are written accordingly.

use sf_db::Database;

use crate::error::{MigrateError, MigrateResult};

/// Statements whose first keyword forces the unprepared execution path.
const DIRECT_EXEC_PREFIXES: [&str; 2] = ["OPTIMIZE ", "EXECUTE "];

/// One versioned script, constructed on demand and discarded after apply.
#[derive(Debug, Clone)]
pub struct Migration {
    version: u32,
    sql: String,
}

impl Migration {
    pub fn new(version: u32, sql: impl Into<String>) -> Self {
        Self {
            version,
            sql: sql.into(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Apply the script, statement by statement, in file order.
    ///
    /// No explicit transaction is opened; atomicity is governed by the
    /// connection's own mode. Execution stops at the first failing statement
    /// and already-executed statements are not rolled back here.
    pub fn apply(&self, db: &dyn Database) -> MigrateResult<()> {
        let sql = strip_line_comments(&self.sql);
        let statements = split_statements(&sql);
        if statements.is_empty() {
            return Err(MigrateError::EmptyMigration {
                version: self.version,
            });
        }

        log::debug!(
            "applying migration {} ({} statements)",
            self.version,
            statements.len()
        );
        for statement in &statements {
            let result = if needs_direct_path(statement) {
                db.execute_direct(statement)
            } else {
                db.execute(statement, &[])
            };
            if let Err(e) = result {
                return Err(MigrateError::ApplyFailed {
                    version: self.version,
                    message: e.to_string(),
                    statement: statement.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Cut each line at its first `-- ` marker.
///
/// Newlines are preserved so that statement splitting still sees the
/// terminator whitespace that followed a trailing comment.
fn strip_line_comments(sql: &str) -> String {
    sql.split('\n')
        .map(|line| line.find("-- ").map_or(line, |i| &line[..i]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on a semicolon followed by at least one whitespace character.
///
/// Whitespace before the separator is dropped, the whitespace run after it is
/// consumed, and blank fragments are discarded. A semicolon at end-of-input
/// has no following whitespace and therefore stays attached to the final
/// statement.
fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ';' && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            push_fragment(&mut statements, &mut current);
        } else {
            current.push(c);
        }
    }
    push_fragment(&mut statements, &mut current);

    statements
}

fn push_fragment(statements: &mut Vec<String>, current: &mut String) {
    let fragment = current.trim_end();
    if !fragment.trim_start().is_empty() {
        statements.push(fragment.to_string());
    }
    current.clear();
}

fn needs_direct_path(statement: &str) -> bool {
    DIRECT_EXEC_PREFIXES.iter().any(|prefix| {
        statement
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
