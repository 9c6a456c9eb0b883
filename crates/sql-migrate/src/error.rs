//! Error types for the migration bootstrap.

use std::path::PathBuf;

use thiserror::Error;

use crate::drivers::common::TlsError;

/// Process exit code for configuration and environment resolution errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Process exit code for TLS registration errors.
pub const EXIT_TLS_ERROR: u8 = 2;
/// Process exit code for connection errors.
pub const EXIT_CONNECTION_ERROR: u8 = 3;
/// Process exit code for config file I/O errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for configuration and connection bootstrap.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Generic configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a mapping of environments.
    #[error("cannot parse config file")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested environment is not in the configuration file.
    #[error("no environment: {0}")]
    NoEnvironment(String),

    /// The environment has an empty dialect.
    #[error("no dialect specified")]
    NoDialect,

    /// The environment has an empty data source.
    #[error("no data source specified")]
    NoDataSource,

    /// Custom TLS profile registration failed.
    #[error("cannot register TLS config")]
    Tls(#[from] TlsError),

    /// The driver could not open a connection.
    #[error("cannot connect to database")]
    Connect(#[source] sqlx::Error),

    /// The connection was opened but did not answer the liveness query.
    #[error("cannot ping database")]
    Ping(#[source] sqlx::Error),

    /// The dialect is not one of the compiled-in dialects.
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A report could not be rendered as JSON.
    #[error("cannot render JSON output")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    /// Map the error to a process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrateError::ConfigRead { .. } => EXIT_IO_ERROR,
            MigrateError::Config(_)
            | MigrateError::Yaml(_)
            | MigrateError::Json(_)
            | MigrateError::NoEnvironment(_)
            | MigrateError::NoDialect
            | MigrateError::NoDataSource => EXIT_CONFIG_ERROR,
            MigrateError::Tls(_) => EXIT_TLS_ERROR,
            MigrateError::Connect(_)
            | MigrateError::Ping(_)
            | MigrateError::UnsupportedDialect(_) => EXIT_CONNECTION_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
