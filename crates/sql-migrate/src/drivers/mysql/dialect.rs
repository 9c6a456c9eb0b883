//! MySQL dialect for the migration tracking table.

use crate::core::traits::Dialect;

/// `mysql` dialect. The tracking table is created with `engine` and
/// `encoding` as table options.
#[derive(Debug, Clone)]
pub struct MysqlDialect {
    pub engine: String,
    pub encoding: String,
}

impl MysqlDialect {
    /// InnoDB tables in UTF8.
    pub fn new() -> Self {
        Self {
            engine: "InnoDB".to_string(),
            encoding: "UTF8".to_string(),
        }
    }
}

impl Default for MysqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_ident(&self, ident: &str) -> String {
        // Embedded backticks are doubled
        let escaped = ident.replace('`', "``");
        format!("`{escaped}`")
    }

    fn param_placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }

    fn create_table_suffix(&self) -> String {
        format!(" engine={} charset={}", self.engine, self.encoding)
    }
}
