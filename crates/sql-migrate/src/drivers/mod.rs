//! Compiled-in dialects: [`sqlite`], [`postgres`] and [`mysql`], plus the
//! TLS profile support in [`common`].
//!
//! [`Driver`] is the closed set of supported dialects. Each variant maps to a
//! connection factory ([`Driver::connect`]) and to a dialect capability handle
//! ([`Driver::dialect`]). Adding a database means adding a variant; nothing is
//! registered at runtime.

pub mod common;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use common::{TlsEnv, TlsProfile, TlsRegistry};
pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::connection::Connection;
use crate::core::traits::Dialect;
use crate::error::MigrateError;

/// Supported database dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    Sqlite3,
    Postgres,
    Mysql,
}

impl Driver {
    /// Every compiled-in driver.
    pub const ALL: [Driver; 3] = [Driver::Sqlite3, Driver::Postgres, Driver::Mysql];

    /// Look up a driver by dialect name.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::UnsupportedDialect`] for any name other than
    /// `sqlite3`, `postgres` or `mysql`.
    pub fn from_name(name: &str) -> crate::error::Result<Self> {
        Driver::ALL
            .into_iter()
            .find(|driver| driver.name() == name)
            .ok_or_else(|| MigrateError::UnsupportedDialect(name.to_string()))
    }

    /// Dialect name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Driver::Sqlite3 => "sqlite3",
            Driver::Postgres => "postgres",
            Driver::Mysql => "mysql",
        }
    }

    /// Capability handle the migration engine uses for this dialect.
    pub fn dialect(&self) -> DialectImpl {
        match self {
            Driver::Sqlite3 => DialectImpl::Sqlite(SqliteDialect::new()),
            Driver::Postgres => DialectImpl::Postgres(PostgresDialect::new()),
            Driver::Mysql => DialectImpl::Mysql(MysqlDialect::new()),
        }
    }

    /// Open a connection to `data_source`.
    ///
    /// `tls` is only consulted by the MySQL driver.
    pub async fn connect(
        &self,
        data_source: &str,
        tls: Option<&TlsProfile>,
    ) -> Result<Connection, sqlx::Error> {
        let connection = match self {
            Driver::Sqlite3 => Connection::Sqlite(sqlite::connect(data_source).await?),
            Driver::Postgres => Connection::Postgres(postgres::connect(data_source).await?),
            Driver::Mysql => Connection::Mysql(mysql::connect(data_source, tls).await?),
        };
        Ok(connection)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Driver {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Driver::from_name(s)
    }
}

/// Dialect handle for whichever driver was selected.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Sqlite(SqliteDialect),
    Postgres(PostgresDialect),
    Mysql(MysqlDialect),
}

impl Dialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Sqlite(d) => d.name(),
            DialectImpl::Postgres(d) => d.name(),
            DialectImpl::Mysql(d) => d.name(),
        }
    }

    fn quote_ident(&self, ident: &str) -> String {
        match self {
            DialectImpl::Sqlite(d) => d.quote_ident(ident),
            DialectImpl::Postgres(d) => d.quote_ident(ident),
            DialectImpl::Mysql(d) => d.quote_ident(ident),
        }
    }

    fn quoted_table(&self, schema: Option<&str>, table: &str) -> String {
        match self {
            DialectImpl::Sqlite(d) => d.quoted_table(schema, table),
            DialectImpl::Postgres(d) => d.quoted_table(schema, table),
            DialectImpl::Mysql(d) => d.quoted_table(schema, table),
        }
    }

    fn param_placeholder(&self, position: usize) -> String {
        match self {
            DialectImpl::Sqlite(d) => d.param_placeholder(position),
            DialectImpl::Postgres(d) => d.param_placeholder(position),
            DialectImpl::Mysql(d) => d.param_placeholder(position),
        }
    }

    fn create_table_suffix(&self) -> String {
        match self {
            DialectImpl::Sqlite(d) => d.create_table_suffix(),
            DialectImpl::Postgres(d) => d.create_table_suffix(),
            DialectImpl::Mysql(d) => d.create_table_suffix(),
        }
    }

    fn truncate_clause(&self) -> &str {
        match self {
            DialectImpl::Sqlite(d) => d.truncate_clause(),
            DialectImpl::Postgres(d) => d.truncate_clause(),
            DialectImpl::Mysql(d) => d.truncate_clause(),
        }
    }

    fn if_table_not_exists(&self) -> &str {
        match self {
            DialectImpl::Sqlite(d) => d.if_table_not_exists(),
            DialectImpl::Postgres(d) => d.if_table_not_exists(),
            DialectImpl::Mysql(d) => d.if_table_not_exists(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_from_name() {
        assert_eq!(Driver::from_name("sqlite3").unwrap(), Driver::Sqlite3);
        assert_eq!(Driver::from_name("postgres").unwrap(), Driver::Postgres);
        assert_eq!(Driver::from_name("mysql").unwrap(), Driver::Mysql);

        // Only the exact configuration names are accepted
        for name in ["sqlite", "postgresql", "MySQL", "mssql", ""] {
            let err = Driver::from_name(name).unwrap_err();
            assert!(matches!(err, MigrateError::UnsupportedDialect(ref n) if n == name));
        }
    }

    #[test]
    fn test_driver_round_trips_through_display() {
        for driver in Driver::ALL {
            assert_eq!(driver.to_string().parse::<Driver>().unwrap(), driver);
        }
    }

    #[test]
    fn test_every_driver_has_matching_dialect() {
        for driver in Driver::ALL {
            assert_eq!(driver.dialect().name(), driver.name());
        }
    }

    #[test]
    fn test_dialect_impl_dispatch() {
        let dialect = Driver::Postgres.dialect();
        assert_eq!(
            dialect.quoted_table(Some("app"), "gorp_migrations"),
            "\"app\".\"gorp_migrations\""
        );
        assert_eq!(dialect.param_placeholder(3), "$3");

        let dialect = Driver::Mysql.dialect();
        assert_eq!(dialect.quote_ident("table"), "`table`");
        assert_eq!(dialect.create_table_suffix(), " engine=InnoDB charset=UTF8");

        let dialect = Driver::Sqlite3.dialect();
        assert_eq!(dialect.truncate_clause(), "delete from");
        assert_eq!(dialect.if_table_not_exists(), "if not exists");
    }
}
