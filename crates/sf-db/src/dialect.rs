//! SQL dialect selection and the table-listing strategy.
//!
//! The only behavior that differs between supported engines is how the table
//! catalog is enumerated, so the dialect is a plain tag plus one query. All
//! fetch helpers are shared by [`crate::adapter::DbAdapter`].

/// A supported relational engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// MySQL or MariaDB
    Mysql,
    /// PostgreSQL
    Pgsql,
}

impl Dialect {
    /// Short tag used in the on-disk schema layout
    /// (`<tag>.sql`, `<tag>-migrations/`).
    pub fn tag(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Pgsql => "pgsql",
        }
    }

    /// Map a driver identifier onto a dialect, or `None` if unsupported.
    pub fn from_driver_name(name: &str) -> Option<Dialect> {
        match name.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Dialect::Mysql),
            "pgsql" | "postgres" | "postgresql" => Some(Dialect::Pgsql),
            _ => None,
        }
    }

    /// The query enumerating user base tables in the active catalog.
    ///
    /// System objects and views are excluded on both engines. Adding a
    /// dialect means adding a variant and an arm here; nothing else changes.
    pub fn table_listing_sql(&self) -> &'static str {
        match self {
            Dialect::Mysql => "SHOW TABLES",
            Dialect::Pgsql => {
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
                 ORDER BY table_name"
            }
        }
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
