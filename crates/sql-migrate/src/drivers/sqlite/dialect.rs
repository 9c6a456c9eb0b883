//! SQLite dialect for the migration tracking table.

use crate::core::traits::Dialect;

/// `sqlite3` dialect. SQLite has no `TRUNCATE`, so tables are emptied with
/// `DELETE FROM`.
#[derive(Debug, Clone, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        "sqlite3"
    }

    fn quote_ident(&self, ident: &str) -> String {
        let escaped = ident.replace('"', "\"\"");
        format!("\"{escaped}\"")
    }

    // No schemas; attached databases are not addressed here.
    fn quoted_table(&self, _schema: Option<&str>, table: &str) -> String {
        self.quote_ident(table)
    }

    fn param_placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }

    fn truncate_clause(&self) -> &str {
        "delete from"
    }
}
