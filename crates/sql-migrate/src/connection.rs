//! Opening and validating the database connection for an environment.

use std::time::{Duration, Instant};

use sqlx::mysql::MySqlConnection;
use sqlx::postgres::PgConnection;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection as _;
use tracing::{debug, info};

use crate::config::Environment;
use crate::drivers::common::{
    register_tls_config, requires_custom_tls, TlsEnv, TlsRegistry, CUSTOM_TLS_KEY,
};
use crate::drivers::Driver;
use crate::error::{MigrateError, Result};

/// A live connection for one of the compiled-in drivers.
///
/// The caller owns the connection and should [`close`](Connection::close) it.
pub enum Connection {
    Sqlite(SqliteConnection),
    Postgres(PgConnection),
    Mysql(MySqlConnection),
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Connection").field(&self.driver()).finish()
    }
}

impl Connection {
    /// Driver that opened this connection.
    pub fn driver(&self) -> Driver {
        match self {
            Connection::Sqlite(_) => Driver::Sqlite3,
            Connection::Postgres(_) => Driver::Postgres,
            Connection::Mysql(_) => Driver::Mysql,
        }
    }

    /// Round-trip liveness check.
    pub async fn ping(&mut self) -> std::result::Result<(), sqlx::Error> {
        match self {
            Connection::Sqlite(conn) => conn.ping().await,
            Connection::Postgres(conn) => conn.ping().await,
            Connection::Mysql(conn) => conn.ping().await,
        }
    }

    /// Ping and report the round-trip latency.
    pub async fn latency(&mut self) -> std::result::Result<Duration, sqlx::Error> {
        let start = Instant::now();
        self.ping().await?;
        Ok(start.elapsed())
    }

    /// Gracefully close the connection.
    pub async fn close(self) -> std::result::Result<(), sqlx::Error> {
        match self {
            Connection::Sqlite(conn) => conn.close().await,
            Connection::Postgres(conn) => conn.close().await,
            Connection::Mysql(conn) => conn.close().await,
        }
    }
}

/// Open and validate the connection for a resolved environment.
///
/// Registers the custom TLS profile first when the environment asks for it,
/// then opens the connection with the dialect's driver and pings it. Any
/// failure aborts the sequence; nothing is retried.
pub async fn open_connection(
    env: &Environment,
    tls_env: &TlsEnv,
    registry: &mut TlsRegistry,
) -> Result<(Connection, Driver)> {
    let custom_tls = requires_custom_tls(&env.dialect, &env.data_source);
    if custom_tls {
        register_tls_config(
            registry,
            &tls_env.ca_cert_file,
            CUSTOM_TLS_KEY,
            &tls_env.server_name,
        )?;
    }

    let driver = Driver::from_name(&env.dialect)?;
    let tls = if custom_tls {
        registry.get(CUSTOM_TLS_KEY)
    } else {
        None
    };

    debug!(
        "Opening {} connection to {}",
        driver,
        env.redacted_data_source()
    );
    let mut connection = driver
        .connect(&env.data_source, tls)
        .await
        .map_err(MigrateError::Connect)?;

    connection.ping().await.map_err(MigrateError::Ping)?;

    info!(
        "Connected to {} database: {}",
        driver,
        env.redacted_data_source()
    );

    Ok((connection, driver))
}
