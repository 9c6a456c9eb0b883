//! # sql-migrate
//!
//! Environment configuration and connection bootstrap for SQL schema
//! migrations.
//!
//! This library turns a `dbconfig.yml` environment into a live, validated
//! database connection for the migration engine:
//!
//! - **Config loading** from a YAML mapping of named environments
//! - **Environment resolution** with defaults and `$VAR` expansion
//! - **Custom TLS profiles** for managed MySQL endpoints (`tls=custom`)
//! - **Connection opening** for SQLite, PostgreSQL and MySQL, with a
//!   liveness check
//!
//! ## Example
//!
//! ```rust,no_run
//! use sql_migrate::{Config, MigrationContext, TlsEnv, TlsRegistry};
//!
//! #[tokio::main]
//! async fn main() -> sql_migrate::Result<()> {
//!     let env = Config::load("dbconfig.yml")?.environment("development")?;
//!     let mut registry = TlsRegistry::new();
//!     let context = MigrationContext::open(&env, &TlsEnv::from_env(), &mut registry).await?;
//!     println!("Connected with {}", context.driver);
//!     context.close().await
//! }
//! ```

pub mod config;
pub mod connection;
pub mod context;
pub mod core;
pub mod drivers;
pub mod error;
pub mod version;

// Re-exports for convenient access
pub use config::{
    Config, ConfigArgs, Environment, MigrationSettings, DEFAULT_CONFIG_FILE, DEFAULT_ENVIRONMENT,
};
pub use connection::{open_connection, Connection};
pub use context::MigrationContext;
pub use crate::core::Dialect;
pub use drivers::{DialectImpl, Driver, TlsEnv, TlsProfile, TlsRegistry};
pub use error::{MigrateError, Result};
pub use version::version;
