//! Scripted in-memory [`Database`] for tests.
//!
//! [`MockDb`] answers queries from canned responses keyed by SQL fragments,
//! injects failures on matching statements, and records everything executed
//! so tests can assert on order and execution path.

use std::cell::RefCell;

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use crate::value::SqlValue;

/// One statement the mock has executed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    pub sql: String,
    pub params: Vec<SqlValue>,
    /// True when the statement went through the unprepared path.
    pub direct: bool,
}

/// Scripted database double.
///
/// Queries match canned responses by substring, first match wins; a query
/// with no matching response yields zero rows. Failures registered with
/// [`MockDb::fail_on`] apply to queries and executions alike.
pub struct MockDb {
    driver: String,
    responses: RefCell<Vec<(String, Vec<Vec<SqlValue>>)>>,
    failures: RefCell<Vec<(String, String)>>,
    executed: RefCell<Vec<ExecutedStatement>>,
    queries: RefCell<Vec<String>>,
}

impl MockDb {
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            responses: RefCell::new(Vec::new()),
            failures: RefCell::new(Vec::new()),
            executed: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn mysql() -> Self {
        Self::new("mysql")
    }

    pub fn pgsql() -> Self {
        Self::new("pgsql")
    }

    /// Answer any query containing `fragment` with `rows`.
    pub fn on_query(&self, fragment: impl Into<String>, rows: Vec<Vec<SqlValue>>) -> &Self {
        self.responses.borrow_mut().push((fragment.into(), rows));
        self
    }

    /// Fail any statement or query containing `fragment`.
    pub fn fail_on(&self, fragment: impl Into<String>, message: impl Into<String>) -> &Self {
        self.failures.borrow_mut().push((fragment.into(), message.into()));
        self
    }

    /// Statements executed so far, in order.
    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.executed.borrow().clone()
    }

    /// Queries issued so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    fn check_failure(&self, sql: &str) -> DbResult<()> {
        let failures = self.failures.borrow();
        match failures.iter().find(|(fragment, _)| sql.contains(fragment.as_str())) {
            Some((_, message)) => Err(DbError::Execution(message.clone())),
            None => Ok(()),
        }
    }
}

impl Database for MockDb {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.executed.borrow_mut().push(ExecutedStatement {
            sql: sql.to_string(),
            params: params.to_vec(),
            direct: false,
        });
        self.check_failure(sql)?;
        Ok(1)
    }

    fn query(&self, sql: &str, _params: &[SqlValue]) -> DbResult<Vec<Vec<SqlValue>>> {
        self.queries.borrow_mut().push(sql.to_string());
        self.check_failure(sql)?;
        let responses = self.responses.borrow();
        Ok(responses
            .iter()
            .find(|(fragment, _)| sql.contains(fragment.as_str()))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }

    fn execute_direct(&self, sql: &str) -> DbResult<usize> {
        self.executed.borrow_mut().push(ExecutedStatement {
            sql: sql.to_string(),
            params: Vec::new(),
            direct: true,
        });
        self.check_failure(sql)?;
        Ok(0)
    }

    fn driver_name(&self) -> &str {
        &self.driver
    }
}
