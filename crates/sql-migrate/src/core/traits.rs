//! Dialect capabilities consumed by the migration engine.

/// How one database engine spells the statements that manage the
/// migration tracking table.
///
/// The engine only sees this trait, never the concrete driver.
pub trait Dialect: Send + Sync {
    /// Dialect name as written in configuration files.
    fn name(&self) -> &str;

    /// Quote a single identifier.
    fn quote_ident(&self, ident: &str) -> String;

    /// Quote a table name, qualified by `schema` when the engine supports it.
    fn quoted_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema.filter(|s| !s.is_empty()) {
            Some(schema) => format!("{}.{}", self.quote_ident(schema), self.quote_ident(table)),
            None => self.quote_ident(table),
        }
    }

    /// Bind placeholder for the 1-based `position`.
    fn param_placeholder(&self, position: usize) -> String;

    /// Table options appended after `CREATE TABLE (...)`.
    fn create_table_suffix(&self) -> String {
        String::new()
    }

    fn truncate_clause(&self) -> &str {
        "truncate"
    }

    fn if_table_not_exists(&self) -> &str {
        "if not exists"
    }
}
