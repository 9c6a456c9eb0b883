//! SQLite connection setup.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

/// Open a SQLite connection, creating the database file if it is missing.
pub async fn connect(data_source: &str) -> Result<SqliteConnection, sqlx::Error> {
    let options = if data_source.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(data_source)?
    } else {
        SqliteConnectOptions::new().filename(data_source)
    };

    options.create_if_missing(true).connect().await
}
