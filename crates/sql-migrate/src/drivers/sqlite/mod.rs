//! SQLite driver.
//!
//! - [`SqliteDialect`]: SQL syntax strategy for SQLite
//! - [`connect`]: opens a single SQLite connection
//!
//! Data sources are either sqlx URLs (`sqlite://app.db`, `sqlite::memory:`)
//! or a bare file path.

mod connect;
mod dialect;

pub use connect::connect;
pub use dialect::SqliteDialect;
