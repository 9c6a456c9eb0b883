//! PostgreSQL dialect for the migration tracking table.

use crate::core::traits::Dialect;

/// `postgres` dialect: double-quoted identifiers, `$n` placeholders and
/// schema-qualified tracking tables.
#[derive(Debug, Clone, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn quote_ident(&self, ident: &str) -> String {
        // Embedded quotes are doubled
        let escaped = ident.replace('"', "\"\"");
        format!("\"{escaped}\"")
    }

    fn param_placeholder(&self, position: usize) -> String {
        format!("${position}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_table_in_schema() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            dialect.quoted_table(Some("app"), "gorp_migrations"),
            "\"app\".\"gorp_migrations\""
        );
        assert_eq!(
            dialect.quoted_table(None, "gorp_migrations"),
            "\"gorp_migrations\""
        );
    }

    #[test]
    fn test_quote_ident_doubles_embedded_quotes() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[test]
    fn test_numbered_placeholders_and_truncate() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgres");
        assert_eq!(dialect.param_placeholder(2), "$2");
        assert_eq!(dialect.truncate_clause(), "truncate");
    }
}
